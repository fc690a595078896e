// ============================================================================
// STATE MODULE - contenedores de estado de página
// ============================================================================

pub mod fetch_state;

pub use fetch_state::{FetchPhase, FetchState};
