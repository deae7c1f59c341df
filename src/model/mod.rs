//! Domain model types (pure).

pub mod catalog;
pub mod error;
pub mod key_action;
pub mod notification;
pub mod payload;

// Re-export for convenience
pub use catalog::{SchemaCatalog, SchemaOption};
pub use error::{SubmitError, ValidationError};
pub use key_action::BuilderAction;
pub use notification::{Notification, NotificationKind, NotificationSlot, NOTIFICATION_LIFETIME};
pub use payload::{SchemaEntry, SegmentPayload};
