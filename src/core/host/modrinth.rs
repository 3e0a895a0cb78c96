// ─── Modrinth Catalog ───
// Search and version listing against the Modrinth v2 API. Hosts can delegate
// `search_modpacks`, `search_content` and `get_modpack_versions` to this.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use super::model::{ContentHit, ModpackHit, ModpackVersion};
use crate::core::content::ContentKind;
use crate::core::error::{UiError, UiResult};
use crate::core::http::build_http_client;
use crate::core::instance::{InstanceSummary, LoaderKind};
use crate::core::search::PAGE_SIZE;

const MODRINTH_API_BASE: &str = "https://api.modrinth.com/v2";

type Facets = Vec<Vec<String>>;

#[derive(Debug, Deserialize)]
struct SearchResponse<T> {
    #[serde(default = "Vec::new")]
    hits: Vec<T>,
}

pub struct ModrinthCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl ModrinthCatalog {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: MODRINTH_API_BASE.to_string(),
        }
    }

    /// Catalog backed by the launcher's shared HTTP client settings.
    pub fn with_default_client() -> UiResult<Self> {
        Ok(Self::new(build_http_client()?))
    }

    /// Point the catalog at a mirror or a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub async fn search_modpacks(
        &self,
        query: &str,
        version: Option<&str>,
        offset: usize,
    ) -> UiResult<Vec<ModpackHit>> {
        let params = search_params(query, &modpack_facets(version), offset, false)?;
        let hits: Vec<ModpackHit> = self.search(&params).await?;
        debug!("Modpack search '{}' @{} returned {} hits", query, offset, hits.len());
        Ok(hits)
    }

    /// Content compatible with the instance's game version and loader.
    /// Instances without a version, and mod searches on vanilla, yield nothing.
    pub async fn search_content(
        &self,
        query: &str,
        instance: &InstanceSummary,
        offset: usize,
        kind: ContentKind,
    ) -> UiResult<Vec<ContentHit>> {
        let loader = instance.loader_kind().unwrap_or_default();
        let Some(facets) = content_facets(&instance.version, loader, kind) else {
            debug!(
                "Skipping {} search for '{}' ({} {})",
                kind, instance.name, instance.loader, instance.version
            );
            return Ok(Vec::new());
        };

        let params = search_params(query, &facets, offset, query.trim().is_empty())?;
        let hits: Vec<ContentHit> = self.search(&params).await?;
        info!(
            "Modrinth search for '{}' on '{}/{}' returned {} hits",
            query,
            instance.version,
            loader.catalog_id(),
            hits.len()
        );
        Ok(hits)
    }

    pub async fn project_versions(&self, project_id: &str) -> UiResult<Vec<ModpackVersion>> {
        let url = format!("{}/project/{}/version", self.base_url, project_id);
        self.get_json(&url, &[]).await
    }

    async fn search<T: DeserializeOwned>(&self, params: &[(&str, String)]) -> UiResult<Vec<T>> {
        let url = format!("{}/search", self.base_url);
        let response: SearchResponse<T> = self.get_json(&url, params).await?;
        Ok(response.hits)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> UiResult<T> {
        let resp = self.client.get(url).query(params).send().await?;

        if !resp.status().is_success() {
            return Err(UiError::CatalogStatus {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }

        Ok(resp.json::<T>().await?)
    }
}

// ── Facets ──────────────────────────────────────────────

fn modpack_facets(version: Option<&str>) -> Facets {
    let mut facets = vec![vec!["project_type:modpack".to_string()]];
    if let Some(version) = version.filter(|v| !v.is_empty()) {
        facets.push(vec![format!("versions:{version}")]);
    }
    facets
}

fn content_facets(game_version: &str, loader: LoaderKind, kind: ContentKind) -> Option<Facets> {
    if game_version.trim().is_empty() || game_version == "?" {
        return None;
    }

    let mut facets = vec![
        vec![format!("versions:{game_version}")],
        vec![format!("project_type:{}", kind.as_str())],
    ];

    if kind == ContentKind::Mod {
        if !loader.is_modded() {
            return None;
        }
        facets.push(vec![format!("categories:{}", loader.catalog_id())]);
    }

    Some(facets)
}

fn search_params(
    query: &str,
    facets: &Facets,
    offset: usize,
    popular: bool,
) -> UiResult<Vec<(&'static str, String)>> {
    let mut params = vec![
        ("query", query.to_string()),
        ("limit", PAGE_SIZE.to_string()),
        ("offset", offset.to_string()),
        ("facets", serde_json::to_string(facets)?),
    ];
    if popular {
        params.push(("index", "downloads".to_string()));
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modpack_facets_add_version_only_when_set() {
        assert_eq!(modpack_facets(None), vec![vec!["project_type:modpack".to_string()]]);
        assert_eq!(modpack_facets(Some("")).len(), 1);
        assert_eq!(
            modpack_facets(Some("1.20.1"))[1],
            vec!["versions:1.20.1".to_string()]
        );
    }

    #[test]
    fn mod_search_needs_a_modded_loader() {
        assert!(content_facets("1.20.1", LoaderKind::Vanilla, ContentKind::Mod).is_none());

        let facets = content_facets("1.20.1", LoaderKind::Fabric, ContentKind::Mod).unwrap();
        assert_eq!(facets.len(), 3);
        assert_eq!(facets[2], vec!["categories:fabric".to_string()]);
    }

    #[test]
    fn shader_search_uses_canonical_project_type() {
        let facets = content_facets("1.21", LoaderKind::Vanilla, ContentKind::ShaderPack).unwrap();
        assert_eq!(
            facets,
            vec![
                vec!["versions:1.21".to_string()],
                vec!["project_type:shader".to_string()],
            ]
        );
        assert!(content_facets("?", LoaderKind::Fabric, ContentKind::Datapack).is_none());
    }

    #[test]
    fn empty_query_sorts_by_downloads() {
        let params = search_params("", &modpack_facets(None), 40, true).unwrap();
        assert!(params.contains(&("limit", "20".to_string())));
        assert!(params.contains(&("offset", "40".to_string())));
        assert!(params.contains(&("index", "downloads".to_string())));
        assert!(params
            .iter()
            .any(|(k, v)| *k == "facets" && v == r#"[["project_type:modpack"]]"#));
    }

    /// Serve canned responses on a local port, one request per connection.
    async fn stub_catalog() -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&request);
                let (status, body) = if head.starts_with("GET /search") {
                    (
                        "200 OK",
                        r#"{"hits": [{"project_id": "abc", "title": "Skyblock"}], "total_hits": 1}"#,
                    )
                } else {
                    ("500 Internal Server Error", r#"{"error": "boom"}"#)
                };
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn catalog_decodes_hits_and_maps_error_status() {
        let base = stub_catalog().await;
        let catalog =
            ModrinthCatalog::new(reqwest::Client::new()).with_base_url(format!("{base}/"));

        let hits = catalog.search_modpacks("sky", None, 0).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].project_id, "abc");
        assert_eq!(hits[0].author, "");

        match catalog.project_versions("abc").await {
            Err(UiError::CatalogStatus { url, status }) => {
                assert_eq!(status, 500);
                assert_eq!(url, format!("{base}/project/abc/version"));
            }
            other => panic!("expected CatalogStatus, got {other:?}"),
        }
    }

    #[test]
    fn search_response_tolerates_missing_hits() {
        let resp: SearchResponse<ContentHit> = serde_json::from_str("{}").unwrap();
        assert!(resp.hits.is_empty());
    }
}
