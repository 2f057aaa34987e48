// ============================================================================
// STATE MODULE - Estado de sesión de búsqueda
// ============================================================================

pub mod session;

pub use session::*;
