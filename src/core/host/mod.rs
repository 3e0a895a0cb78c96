pub mod api;
pub mod model;
pub mod modrinth;

pub use api::{HostApi, HostEvent};
pub use model::{
    Account, ContentHit, InitData, InstallOutcome, InstalledItem, ModpackHit, ModpackVersion,
};
pub use modrinth::ModrinthCatalog;
