use crate::directory::FilterField;
use crate::store::LoadPhase;
use crate::ui::app::App;
use crate::ui::footer::footer;
use crate::ui::header::Header;
use crate::ui::layout::{filter_slots, layout_regions};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PLACEHOLDER, ROW_ALT, STATUS_ERROR,
    STATUS_LOADING,
};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app.state()), regions.header);
    draw_filters(frame, app, regions.filters);
    frame.render_widget(status_line(app), regions.status);
    draw_table(frame, app, regions.table);
    frame.render_widget(footer(app.focus(), &app.state().filters), regions.footer);
}

fn draw_filters(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let filters = &app.state().filters;
    for (field, slot) in FilterField::ALL.into_iter().zip(filter_slots(area)) {
        let focused = field == app.focus();
        let value = filters.get(field);
        let border_color = if focused { ACCENT } else { GLOBAL_BORDER };

        let text = if value.is_empty() {
            Span::styled(
                format!("Search by {}", field.as_str()),
                Style::default().fg(PLACEHOLDER),
            )
        } else {
            Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT))
        };

        let input = Paragraph::new(Line::from(text)).block(
            Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(input, slot);

        if focused && slot.width > 2 && slot.height > 2 {
            frame.set_cursor_position((cursor_x(slot, value), slot.y + 1));
        }
    }
}

/// Column just past the typed text, kept inside the input's borders.
fn cursor_x(slot: Rect, value: &str) -> u16 {
    let inner_width = slot.width.saturating_sub(2);
    let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
    slot.x + 1 + typed.min(inner_width.saturating_sub(1))
}

fn status_line(app: &App) -> Paragraph<'static> {
    let state = app.state();
    let line = match state.phase() {
        LoadPhase::Loading => Line::from(Span::styled(
            format!("{} Loading...", app.spinner()),
            Style::default().fg(STATUS_LOADING),
        )),
        LoadPhase::Failed => Line::from(Span::styled(
            state.error_message.clone().unwrap_or_default(),
            Style::default().fg(STATUS_ERROR),
        )),
        LoadPhase::Idle => Line::from(""),
    };
    Paragraph::new(line).alignment(Alignment::Center)
}

fn draw_table(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.state();
    let header_style = Style::default()
        .fg(HEADER_SEPARATOR)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(FilterField::ALL.into_iter().map(|field| Cell::from(field.label())))
        .style(header_style)
        .bottom_margin(1);

    let rows = state
        .visible_records
        .iter()
        .enumerate()
        .skip(app.scroll())
        .map(|(idx, record)| {
            let cells = FilterField::ALL
                .into_iter()
                .map(|field| Cell::from(record.field(field).unwrap_or("").to_string()));
            let style = if idx % 2 == 1 {
                Style::default().fg(HEADER_TEXT).bg(ROW_ALT)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            Row::new(cells).style(style)
        });

    let table = Table::new(rows, [Constraint::Ratio(1, 4); 4]).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(table, area);
}
