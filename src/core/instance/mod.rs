pub mod model;

pub use model::{InstanceSummary, LoaderKind};
