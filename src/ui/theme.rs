use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x63, 0x66, 0xf1);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PLACEHOLDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_LOADING: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ROW_ALT: Color = Color::Rgb(0x1f, 0x1f, 0x1f);
