//! UI state machine (pure).
//!
//! All state transitions are testable without a terminal. The only impure
//! collaborators (clock and submitter) are injected behind traits.

pub mod app_state;
pub mod builder;
pub mod clock;
pub mod draft;
pub mod modal_handler;

// Re-export for convenience
pub use app_state::{AppState, ModalFocus};
pub use builder::{BuilderSnapshot, RowSnapshot, SaveOutcome, SegmentBuilder};
pub use clock::{Clock, SystemClock};
pub use draft::SegmentDraft;
pub use modal_handler::handle_key;
