use ratatui::style::Style;

pub mod help_overlay;
pub mod keyboard;
pub mod mode_panel;
pub mod prompt;
pub mod stats_bar;

/// Strip colours from `style` in monochrome mode. Modifiers are kept.
pub fn paint(style: Style, monochrome: bool) -> Style {
    if monochrome {
        Style {
            fg: None,
            bg: None,
            ..style
        }
    } else {
        style
    }
}
