use crate::directory::{FilterField, FilterSet};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, PLACEHOLDER};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const KEYS: &str = "Tab/Shift+Tab switch  Ctrl+U clear  Esc quit";

/// Describe the input being edited: its typed text, or the prompt while empty.
pub fn editing_label(focus: FilterField, filters: &FilterSet) -> String {
    let value = filters.get(focus);
    if value.is_empty() {
        format!("{}: Search by {}", focus.label(), focus.as_str())
    } else {
        format!("{}: \"{}\"", focus.label(), value)
    }
}

pub fn active_filter_count(filters: &FilterSet) -> usize {
    FilterField::ALL
        .into_iter()
        .filter(|field| !filters.get(*field).is_empty())
        .count()
}

/// Bottom bar: focused input on the left, filter count and keys after it.
pub fn footer(focus: FilterField, filters: &FilterSet) -> Paragraph<'static> {
    let separator = Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR));
    let active = match active_filter_count(filters) {
        0 => "no filters".to_string(),
        1 => "1 filter".to_string(),
        n => format!("{n} filters"),
    };

    let line = Line::from(vec![
        Span::styled(
            editing_label(focus, filters),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        separator.clone(),
        Span::styled(active, Style::default().fg(PLACEHOLDER)),
        separator,
        Span::styled(
            KEYS,
            Style::default().fg(PLACEHOLDER).add_modifier(Modifier::DIM),
        ),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_focused_field_shows_prompt() {
        let filters = FilterSet::default();
        assert_eq!(
            editing_label(FilterField::Email, &filters),
            "Email: Search by email"
        );
        assert_eq!(active_filter_count(&filters), 0);
    }

    #[test]
    fn typed_text_replaces_prompt() {
        let mut filters = FilterSet::default();
        filters.set(FilterField::Name, "lea".to_string());
        filters.set(FilterField::Phone, "770".to_string());
        assert_eq!(editing_label(FilterField::Name, &filters), "Name: \"lea\"");
        assert_eq!(active_filter_count(&filters), 2);
    }
}
