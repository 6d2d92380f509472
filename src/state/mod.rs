//! Screen state machine (pure apart from the fetch worker).
//!
//! State transitions are plain methods testable without a terminal.

pub mod list_scroll;
pub mod load_controller;
pub mod render_gate;
pub mod render_state;
pub mod screen;
pub mod view_state;

// Re-export for convenience
pub use list_scroll::ListScroll;
pub use load_controller::{LoadController, LoadRequest, LogicalFailurePolicy};
pub use render_gate::{RenderGate, RenderSnapshot, needs_rerender};
pub use render_state::{RenderState, derive_render_state};
pub use screen::ReceiptScreen;
pub use view_state::ViewState;
