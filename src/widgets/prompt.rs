use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::paint;
use crate::drill::session::{Outcome, Phase};

/// The question line: what to press, or feedback on the last keystroke.
pub struct PromptWidget<'a> {
    /// Session phase
    pub phase: Phase,
    /// Current target key, if any
    pub target: Option<&'a str>,
    /// The last key label the user pressed
    pub last_input: Option<&'a str>,
    pub monochrome: bool,
}

impl<'a> PromptWidget<'a> {
    /// The prompt text for the current phase.
    pub fn message(&self) -> String {
        let target = self.target.unwrap_or("?");
        match self.phase {
            Phase::Idle => "Select a practice mode and press Ctrl+S to start".into(),
            Phase::AwaitingInput => format!("Press {target}"),
            Phase::Feedback(Outcome::Correct) => "Correct!".into(),
            Phase::Feedback(Outcome::Wrong) => format!("Wrong! Press {target}"),
        }
    }

    fn style(&self) -> Style {
        if self.monochrome {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        let fg = match self.phase {
            Phase::Idle => Color::Gray,
            Phase::AwaitingInput => Color::Cyan,
            Phase::Feedback(Outcome::Correct) => Color::Green,
            Phase::Feedback(Outcome::Wrong) => Color::Red,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }
}

impl<'a> Widget for PromptWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Question ")
            .border_style(paint(
                Style::default().fg(Color::DarkGray),
                self.monochrome,
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from(Span::styled(self.message(), self.style()))];
        if let Some(input) = self.last_input {
            let shown = if input == " " { "Space" } else { input };
            lines.push(Line::from(Span::styled(
                format!("You pressed: {shown}"),
                paint(Style::default().fg(Color::DarkGray), self.monochrome),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
