//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header;
mod layout;

pub use header::Header;
pub use layout::Layout;
