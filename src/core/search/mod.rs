pub mod debounce;
pub mod session;

pub use debounce::Debouncer;
pub use session::{SearchPhase, SearchSession, SearchTicket};

/// Hits per search page. A shorter page means the results are exhausted.
pub const PAGE_SIZE: usize = 20;

/// Quiet period before a typed query is issued.
pub const DEBOUNCE_MS: u64 = 500;
