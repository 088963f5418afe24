use std::collections::BTreeSet;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use super::paint;
use crate::drill::layout::{is_home_row, KEYBOARD_ROWS, SPACE};

/// Width of one key cap, brackets included: `[A]`.
const KEY_WIDTH: u16 = 5;
/// Width of the space bar cap.
const SPACE_WIDTH: u16 = 29;

/// On-screen QWERTY keyboard with target highlighting and a press flash.
pub struct KeyboardWidget<'a> {
    /// Keys to highlight (the current target)
    pub highlighted: &'a BTreeSet<String>,
    /// Key currently flashing from a press
    pub pressed: Option<&'a str>,
    pub monochrome: bool,
}

impl<'a> KeyboardWidget<'a> {
    fn key_style(&self, label: &str) -> Style {
        let highlighted = self.highlighted.contains(label);
        let pressed = self.pressed == Some(label);

        if self.monochrome {
            let mut style = Style::default();
            if highlighted {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if pressed {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            return style;
        }

        if pressed {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else if highlighted {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if is_home_row(label) {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn cap(label: &str) -> String {
        if label == SPACE {
            let inner = SPACE_WIDTH as usize - 2;
            format!("[{label:^inner$}]")
        } else {
            format!("[{label:^width$}]", width = KEY_WIDTH as usize - 2)
        }
    }
}

impl<'a> Widget for KeyboardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Keyboard ")
            .border_style(paint(
                Style::default().fg(Color::DarkGray),
                self.monochrome,
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        for (row_idx, row) in KEYBOARD_ROWS.iter().enumerate() {
            let y = inner.y + row_idx as u16;
            if y >= inner.y + inner.height {
                break;
            }

            // Stagger rows like a physical keyboard
            let indent = (row_idx as u16).min(3) * 2;
            let row_width: u16 = row
                .iter()
                .map(|k| if *k == SPACE { SPACE_WIDTH } else { KEY_WIDTH })
                .sum::<u16>()
                + indent;
            let x = inner.x + inner.width.saturating_sub(row_width) / 2 + indent;

            let spans: Vec<Span> = row
                .iter()
                .map(|label| Span::styled(Self::cap(label), self.key_style(label)))
                .collect();
            let line = Line::from(spans);
            let avail = (inner.x + inner.width).saturating_sub(x);
            buf.set_line(x, y, &line, avail);
        }
    }
}
