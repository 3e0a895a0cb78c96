use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING};
use reqwest::Client;

/// Catalog APIs reject anonymous clients; identify as the launcher build.
const CATALOG_USER_AGENT: &str = "FoliaLauncher/beta-2 (folia-ui)";
const CATALOG_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for JSON catalog requests (search, project versions).
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("identity"));

    Client::builder()
        .user_agent(CATALOG_USER_AGENT)
        .default_headers(headers)
        .timeout(CATALOG_TIMEOUT)
        .build()
}
