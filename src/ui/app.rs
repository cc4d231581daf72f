use std::time::Duration;

use crate::directory::{FilterField, Record};
use crate::source::LoadError;
use crate::store::{Store, UsersState};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// TUI application state: the store plus view-only concerns
/// (input focus, table scroll, quit flag).
pub struct App {
    store: Store,
    focus: FilterField,
    scroll: usize,
    ticks: u64,
    tick_rate: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            store: Store::new(),
            focus: FilterField::Name,
            scroll: 0,
            ticks: 0,
            tick_rate,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &UsersState {
        self.store.state()
    }

    pub fn focus(&self) -> FilterField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Text of the focused filter input.
    pub fn focused_value(&self) -> &str {
        self.state().filters.get(self.focus)
    }

    pub fn push_char(&mut self, ch: char) {
        let mut value = self.focused_value().to_string();
        value.push(ch);
        self.edit_focused(value);
    }

    pub fn pop_char(&mut self) {
        let mut value = self.focused_value().to_string();
        if value.pop().is_some() {
            self.edit_focused(value);
        }
    }

    pub fn clear_focused(&mut self) {
        if !self.focused_value().is_empty() {
            self.edit_focused(String::new());
        }
    }

    fn edit_focused(&mut self, value: String) {
        self.store.set_filter(self.focus, value);
        self.clamp_scroll();
    }

    pub fn on_load_started(&mut self) {
        self.store.begin_load();
    }

    pub fn on_load_finished(&mut self, result: Result<Vec<Record>, LoadError>) {
        self.store.finish_load(result);
        self.clamp_scroll();
    }

    /// Index of the first table row shown.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta);
        self.clamp_scroll();
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    fn clamp_scroll(&mut self) {
        let max = self.state().visible_records.len().saturating_sub(1);
        self.scroll = self.scroll.min(max);
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    /// Spinner glyph for the loading indicator.
    pub fn spinner(&self) -> &'static str {
        SPINNER[(self.ticks % SPINNER.len() as u64) as usize]
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
