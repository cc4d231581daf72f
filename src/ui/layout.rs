use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::directory::FilterField;

/// Screen areas, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub filters: Rect,
    pub status: Rect,
    pub table: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    Regions {
        header: chunks[0],
        filters: chunks[1],
        status: chunks[2],
        table: chunks[3],
        footer: chunks[4],
    }
}

/// One equal-width slot per filter input.
pub fn filter_slots(area: Rect) -> [Rect; FilterField::ALL.len()] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, FilterField::ALL.len() as u32); FilterField::ALL.len()])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}
