use std::str::FromStr;

use ratatui::style::Color;

// Surface colors
pub const FIELD_TEXT: Color = Color::Rgb(36, 33, 61);          // #24213D
pub const FIELD_BORDER: Color = Color::Rgb(136, 137, 136);     // #888988
pub const FIELD_FOCUS: Color = Color::Rgb(0, 122, 254);        // #007AFE
pub const ICON_GRAY: Color = Color::Rgb(128, 128, 128);        // gray

// Sheet colors
pub const SHEET_BAR: Color = Color::Rgb(239, 241, 242);        // #EFF1F2
pub const SHEET_BAR_BORDER: Color = Color::Rgb(145, 148, 152); // #919498
pub const SHEET_LIST: Color = Color::Rgb(208, 212, 219);       // #D0D4DB
pub const DONE_BLUE: Color = Color::Rgb(0, 122, 254);          // #007AFE

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);         // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);       // #FFFFFF
pub const HIGHLIGHT: Color = Color::Rgb(161, 193, 129);        // #A1C181

/// Parse an item color like `#9EA0A4`, ignoring anything unparsable.
pub fn parse_color(value: &str) -> Option<Color> {
    Color::from_str(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_color("#9EA0A4"), Some(Color::Rgb(0x9E, 0xA0, 0xA4)));
        assert_eq!(parse_color("not a color at all"), None);
    }
}
