//! Submission payload sent to the segment collaborator.
//!
//! Wire shape:
//!
//! ```json
//! { "segment_name": "High value", "schema": [ { "city": "City" } ] }
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::catalog::SchemaOption;

/// One added schema, serialized as a single-key object `{ value: label }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry(pub SchemaOption);

impl Serialize for SchemaEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0.value, self.0.label)?;
        map.end()
    }
}

/// JSON body of the remote submission call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentPayload {
    /// Segment name exactly as typed (not trimmed).
    pub segment_name: String,
    /// Added schemas in display order.
    pub schema: Vec<SchemaEntry>,
}

impl SegmentPayload {
    /// Build a payload from a name and the ordered schema rows.
    pub fn new(segment_name: impl Into<String>, schemas: &[SchemaOption]) -> Self {
        Self {
            segment_name: segment_name.into(),
            schema: schemas.iter().copied().map(SchemaEntry).collect(),
        }
    }
}
