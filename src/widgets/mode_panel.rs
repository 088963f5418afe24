use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::paint;
use crate::drill::practice::PracticeMode;

/// Name, description and key sequence of the active practice mode.
pub struct ModePanelWidget<'a> {
    pub mode: &'a PracticeMode,
    /// 0-based position of the mode in the table
    pub index: usize,
    /// Number of modes in the table
    pub count: usize,
    pub monochrome: bool,
}

impl<'a> Widget for ModePanelWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mono = self.monochrome;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Mode {}/{} ", self.index + 1, self.count))
            .border_style(paint(Style::default().fg(Color::Blue), mono));

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    self.mode.name,
                    paint(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                        mono,
                    ),
                ),
                Span::raw("  "),
                Span::styled(
                    self.mode.description,
                    paint(Style::default().fg(Color::Gray), mono),
                ),
            ]),
            Line::from(Span::styled(
                self.mode.keys.join(" "),
                paint(Style::default().fg(Color::DarkGray), mono),
            )),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
