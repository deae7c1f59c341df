//! Top-level UI state: the builder plus which modal field has focus.

use super::builder::SegmentBuilder;

/// Modal field receiving keyboard input.
///
/// # Cardinality
/// - `Name`: 1 state
/// - `Row(i)`: one per existing row (0 <= i < row_count)
/// - `Pending`: 1 state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalFocus {
    /// Segment name text field.
    #[default]
    Name,
    /// Selector of an added schema row.
    Row(usize),
    /// The "Add schema to segment" selector.
    Pending,
}

impl ModalFocus {
    /// Next field in Name → rows → Pending → Name order.
    pub fn next(self, row_count: usize) -> Self {
        match self {
            ModalFocus::Name if row_count > 0 => ModalFocus::Row(0),
            ModalFocus::Name => ModalFocus::Pending,
            ModalFocus::Row(i) if i + 1 < row_count => ModalFocus::Row(i + 1),
            ModalFocus::Row(_) => ModalFocus::Pending,
            ModalFocus::Pending => ModalFocus::Name,
        }
    }

    /// Previous field, reverse of [`next`](Self::next).
    pub fn prev(self, row_count: usize) -> Self {
        match self {
            ModalFocus::Name => ModalFocus::Pending,
            ModalFocus::Row(0) => ModalFocus::Name,
            ModalFocus::Row(i) => ModalFocus::Row((i - 1).min(row_count.saturating_sub(1))),
            ModalFocus::Pending if row_count > 0 => ModalFocus::Row(row_count - 1),
            ModalFocus::Pending => ModalFocus::Name,
        }
    }

    /// Keep focus on an existing field after rows were removed.
    pub fn clamp(self, row_count: usize) -> Self {
        match self {
            ModalFocus::Row(_) if row_count == 0 => ModalFocus::Pending,
            ModalFocus::Row(i) if i >= row_count => ModalFocus::Row(row_count - 1),
            other => other,
        }
    }
}

/// Application state driven by the event loop.
pub struct AppState {
    /// Segment builder controller.
    pub builder: SegmentBuilder,
    /// Modal field receiving keys.
    pub focus: ModalFocus,
}

impl AppState {
    /// Wrap `builder` with focus on the name field.
    pub fn new(builder: SegmentBuilder) -> Self {
        Self {
            builder,
            focus: ModalFocus::default(),
        }
    }

    /// Number of schema rows in the draft.
    pub fn row_count(&self) -> usize {
        self.builder.draft().schemas().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_name_rows_pending() {
        let mut focus = ModalFocus::Name;
        let mut seen = Vec::new();
        for _ in 0..5 {
            focus = focus.next(3);
            seen.push(focus);
        }
        assert_eq!(
            seen,
            vec![
                ModalFocus::Row(0),
                ModalFocus::Row(1),
                ModalFocus::Row(2),
                ModalFocus::Pending,
                ModalFocus::Name
            ]
        );
    }

    #[test]
    fn next_skips_rows_when_none_exist() {
        assert_eq!(ModalFocus::Name.next(0), ModalFocus::Pending);
    }

    #[test]
    fn prev_is_reverse_of_next() {
        assert_eq!(ModalFocus::Name.prev(2), ModalFocus::Pending);
        assert_eq!(ModalFocus::Pending.prev(2), ModalFocus::Row(1));
        assert_eq!(ModalFocus::Row(1).prev(2), ModalFocus::Row(0));
        assert_eq!(ModalFocus::Row(0).prev(2), ModalFocus::Name);
        assert_eq!(ModalFocus::Pending.prev(0), ModalFocus::Name);
    }

    #[test]
    fn clamp_moves_off_removed_rows() {
        assert_eq!(ModalFocus::Row(2).clamp(2), ModalFocus::Row(1));
        assert_eq!(ModalFocus::Row(0).clamp(0), ModalFocus::Pending);
        assert_eq!(ModalFocus::Row(1).clamp(3), ModalFocus::Row(1));
        assert_eq!(ModalFocus::Name.clamp(0), ModalFocus::Name);
    }
}
