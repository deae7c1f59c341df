//! In-memory segment being edited.

use crate::model::{SchemaOption, SegmentPayload};

/// Name plus ordered schema rows.
///
/// Row order is insertion order is display order. No two rows share a
/// `value`; [`SegmentBuilder`](super::SegmentBuilder) is the only writer and
/// enforces that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentDraft {
    pub(crate) name: String,
    pub(crate) schemas: Vec<SchemaOption>,
}

impl SegmentDraft {
    /// Name as typed, untrimmed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rows in display order.
    pub fn schemas(&self) -> &[SchemaOption] {
        &self.schemas
    }

    /// True when the name has non-whitespace content.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Values of every row except `row`.
    pub(crate) fn values_except(&self, row: Option<usize>) -> impl Iterator<Item = &'static str> + '_ {
        self.schemas
            .iter()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != row)
            .map(|(_, o)| o.value)
    }

    /// Wire payload for the current draft.
    pub fn to_payload(&self) -> SegmentPayload {
        SegmentPayload::new(self.name.clone(), &self.schemas)
    }
}
