//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod document;
mod header;

pub use document::DocumentBody;
pub use header::Header;
