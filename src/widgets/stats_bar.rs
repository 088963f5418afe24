use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::paint;

/// Bottom bar showing app mode, practice mode, and the running score.
pub struct StatsBarWidget<'a> {
    /// App mode label (e.g., "DRILL", "HELP")
    pub mode: &'a str,
    /// Practice mode name
    pub practice: &'a str,
    /// Accuracy percentage
    pub accuracy: u32,
    /// Keystrokes scored so far
    pub total: u32,
    /// Keystrokes that matched
    pub correct: u32,
    pub monochrome: bool,
}

impl<'a> StatsBarWidget<'a> {
    /// Right-aligned score text.
    pub fn stats_text(&self) -> String {
        format!(
            " Accuracy: {}%  Keys: {} ({} correct) ",
            self.accuracy, self.total, self.correct
        )
    }
}

impl<'a> Widget for StatsBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let bg = Color::DarkGray;
        let mono = self.monochrome;

        // Fill background
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_style(paint(Style::default().bg(bg), mono));
        }

        let mode_style = paint(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            mono,
        );
        let practice_style = paint(Style::default().fg(Color::White).bg(bg), mono);
        let stats_style = paint(Style::default().fg(Color::Yellow).bg(bg), mono);

        let mut spans = vec![
            Span::styled(format!(" {} ", self.mode), mode_style),
            Span::styled(format!(" {} ", self.practice), practice_style),
        ];

        let left_len: usize = spans.iter().map(|s| s.width()).sum();
        let stats_text = self.stats_text();
        let padding = (area.width as usize).saturating_sub(left_len + stats_text.len());
        if padding > 0 {
            spans.push(Span::styled(
                " ".repeat(padding),
                paint(Style::default().bg(bg), mono),
            ));
        }
        spans.push(Span::styled(stats_text, stats_style));

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
