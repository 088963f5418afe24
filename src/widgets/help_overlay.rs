use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::paint;

/// Help overlay showing the drill keybindings.
pub struct HelpOverlayWidget {
    pub monochrome: bool,
}

impl Widget for HelpOverlayWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Center the help popup
        let width = 56.min(area.width.saturating_sub(4));
        let height = 14.min(area.height.saturating_sub(4));
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let popup = Rect::new(x, y, width, height);

        Clear.render(popup, buf);

        let mono = self.monochrome;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(paint(Style::default().fg(Color::Yellow), mono));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let key_style = paint(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            mono,
        );
        let desc_style = paint(Style::default().fg(Color::White), mono);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("{key:>14}  "), key_style),
                    Span::styled(*desc, desc_style),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        paragraph.render(inner, buf);
    }
}

const BINDINGS: [(&str, &str); 7] = [
    ("F1", "Toggle this help"),
    ("Ctrl+S", "Start practising"),
    ("Ctrl+R", "Reset counters and stop"),
    ("Ctrl+N", "Next practice mode"),
    ("Ctrl+C / Ctrl+Q", "Quit"),
    ("Space", "Answers a Space target"),
    ("any other key", "Scored against the target"),
];
