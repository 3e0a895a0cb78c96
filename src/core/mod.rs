// ─── FoliaLauncher UI Core ───
// View-state coordinator for the launcher front end. Every substantive
// operation is delegated to the host through `host::HostApi`.
//
// Architecture:
//   core/
//     content/    : Content kinds (mod, resource pack, shader, datapack)
//     instance/   : Instance summary + loader kinds
//     host/       : Host capability trait, payloads, Modrinth catalog helper
//     i18n/       : Language table, resource bundles, localizer
//     search/     : Paginated search sessions + debounce timer
//     dialog      : Alert / confirm / prompt continuation slots
//     state/      : View state, settings, UI configuration
//     view/       : Declarative view descriptions + pure renderers

pub mod content;
pub mod dialog;
pub mod error;
pub mod host;
pub mod http;
pub mod i18n;
pub mod instance;
pub mod search;
pub mod state;
pub mod view;
