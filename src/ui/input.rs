use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE: isize = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'u') {
        app.clear_focused();
        return;
    }

    match key.code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Up => app.scroll_by(-1),
        KeyCode::Down => app.scroll_by(1),
        KeyCode::PageUp => app.scroll_by(-PAGE),
        KeyCode::PageDown => app.scroll_by(PAGE),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::Char(ch) if !is_chord(key) => app.push_char(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT)
}

/// Ctrl or Alt alone. Both together is AltGr on Windows, which produces
/// ordinary characters such as `@`.
fn is_chord(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) ^ key.modifiers.contains(KeyModifiers::ALT)
}
