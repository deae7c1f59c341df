//! "Saving Segment" modal rendering.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::styles;
use crate::model::SchemaOption;
use crate::state::{BuilderSnapshot, ModalFocus};

/// Fixed modal width in columns.
const MODAL_WIDTH: u16 = 76;

const NAME_PLACEHOLDER: &str = "Name of the segment";
const PENDING_PLACEHOLDER: &str = "Add schema to segment";

/// Render the segment modal overlay.
///
/// Displays a centered modal with:
/// - Segment name field
/// - Trait legend
/// - One selector per added schema row
/// - The pending "Add schema to segment" selector
/// - Footer with keybinding hints
///
/// Only renders when `snapshot.modal_open` is true.
pub fn render_segment_modal(frame: &mut Frame, snapshot: &BuilderSnapshot, focus: ModalFocus) {
    if !snapshot.modal_open {
        return;
    }

    let lines = build_modal_lines(snapshot, focus);
    let modal_area = centered_rect(MODAL_WIDTH, lines.len() as u16 + 2, frame.area());

    frame.render_widget(Clear, modal_area);

    let modal = Paragraph::new(lines).block(
        Block::default()
            .title(Line::from(Span::styled(" Saving Segment ", styles::SECTION_HEADER)))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(styles::MODAL_BORDER),
    );

    frame.render_widget(modal, modal_area);
}

/// Build the modal body, top to bottom.
fn build_modal_lines(snapshot: &BuilderSnapshot, focus: ModalFocus) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        " Enter the Name of the Segment",
        styles::SECTION_HEADER,
    )));
    lines.push(name_field(&snapshot.name, focus == ModalFocus::Name));
    lines.push(Line::default());

    lines.push(Line::from(
        " To save your segment, you need to add the schemas to build the query.",
    ));
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled("● ", styles::USER_TRAIT_DOT),
        Span::raw("User Traits   "),
        Span::styled("● ", styles::GROUP_TRAIT_DOT),
        Span::raw("Group Traits"),
    ]));
    lines.push(Line::default());

    if snapshot.rows.is_empty() {
        lines.push(Line::from(Span::styled(
            " No schemas added yet. Pick one below and press Enter to add it.",
            styles::MUTED_TEXT,
        )));
    } else {
        for (i, row) in snapshot.rows.iter().enumerate() {
            let focused = focus == ModalFocus::Row(i);
            let others = row.available.len().saturating_sub(1);
            lines.push(Line::from(vec![
                Span::raw(" "),
                Span::styled("● ", styles::USER_TRAIT_DOT),
                selector(row.selected.label, focused),
                Span::styled(
                    format!("  {others} other option(s)"),
                    styles::MUTED_TEXT,
                ),
            ]));
            if focused {
                lines.push(row_options(&row.available, row.selected));
            }
        }
    }
    lines.push(Line::default());

    let pending_label = snapshot
        .pending
        .map_or(PENDING_PLACEHOLDER, |option| option.label);
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled("● ", styles::MUTED_TEXT),
        selector(pending_label, focus == ModalFocus::Pending),
        Span::styled(
            format!("  {} available", snapshot.pending_available.len()),
            styles::MUTED_TEXT,
        ),
    ]));
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled("+ Add new schema", styles::KEY_HINT),
        Span::styled(" (Enter)", styles::MUTED_TEXT),
    ]));
    lines.push(Line::default());

    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled("Ctrl+S", styles::KEY_HINT),
        Span::raw(" Save the Segment  "),
        Span::styled("Esc", styles::KEY_HINT),
        Span::raw(" Cancel  "),
        Span::styled("Tab", styles::KEY_HINT),
        Span::raw(" Next  "),
        Span::styled("←/→", styles::KEY_HINT),
        Span::raw(" Change  "),
        Span::styled("Del", styles::KEY_HINT),
        Span::raw(" Remove"),
    ]));

    lines
}

/// Every option a focused row can switch to, its current choice highlighted.
fn row_options(available: &[SchemaOption], selected: SchemaOption) -> Line<'static> {
    let mut spans = vec![Span::raw("     ")];
    for (i, option) in available.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", styles::MUTED_TEXT));
        }
        let style = if *option == selected {
            styles::KEY_HINT
        } else {
            styles::MUTED_TEXT
        };
        spans.push(Span::styled(option.label, style));
    }
    Line::from(spans)
}

fn name_field(name: &str, focused: bool) -> Line<'static> {
    let content = if name.is_empty() && !focused {
        Span::styled(NAME_PLACEHOLDER, styles::MUTED_TEXT)
    } else if focused {
        Span::styled(format!("{name}▏"), styles::FOCUSED)
    } else {
        Span::raw(name.to_string())
    };

    Line::from(vec![Span::raw(" > "), content])
}

fn selector(label: &str, focused: bool) -> Span<'static> {
    let text = format!("◀ {label} ▶");
    if focused {
        Span::styled(text, styles::FOCUSED)
    } else {
        Span::raw(text)
    }
}

/// Center a box of `width` x `height` in `area`, shrinking to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

#[cfg(test)]
#[path = "segment_modal_tests.rs"]
mod tests;
