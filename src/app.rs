use std::collections::BTreeSet;
use std::fmt;
use std::time::{Duration, Instant};

use crossterm::event::Event;
use log::info;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use serde::Serialize;

use crate::config::AppConfig;
use crate::drill::layout::{highlight_keys, layout_label};
use crate::drill::practice;
use crate::drill::session::SessionState;
use crate::keys::{map_key_event, Action};
use crate::modes::AppMode;
use crate::widgets::help_overlay::HelpOverlayWidget;
use crate::widgets::keyboard::KeyboardWidget;
use crate::widgets::mode_panel::ModePanelWidget;
use crate::widgets::prompt::PromptWidget;
use crate::widgets::stats_bar::StatsBarWidget;

/// The main application state.
pub struct App {
    /// The drill session
    pub session: SessionState,
    /// Current application mode
    pub mode: AppMode,
    /// Whether the app should exit
    pub should_quit: bool,
    /// Configuration
    pub config: AppConfig,
    /// Last key label scored by the session
    pub last_input: Option<String>,
    /// Layout key lit by the last press, and when the flash ends
    pub pressed: Option<(String, Instant)>,
}

/// What gets printed when the program exits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub mode: &'static str,
    pub correct: u32,
    pub total: u32,
    pub accuracy: u32,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}% accuracy ({}/{} keys correct)",
            self.mode, self.accuracy, self.correct, self.total
        )
    }
}

impl SessionSummary {
    /// The text printed on exit: the one-line form, or pretty JSON.
    pub fn render(&self, json: bool) -> serde_json::Result<String> {
        if json {
            serde_json::to_string_pretty(self)
        } else {
            Ok(self.to_string())
        }
    }
}

impl App {
    pub fn new(session: SessionState, config: AppConfig) -> Self {
        Self {
            session,
            mode: AppMode::Drill,
            should_quit: false,
            config,
            last_input: None,
            pressed: None,
        }
    }

    fn press_flash(&self) -> Duration {
        self.config.timing.press_flash()
    }

    /// Handle a terminal event received at `now`.
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        let Event::Key(key) = event else {
            return;
        };

        let action = map_key_event(key);
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }

        match self.mode {
            AppMode::Help => {
                // Any key dismisses help
                if action != Action::None {
                    self.mode = AppMode::Drill;
                }
            }
            AppMode::Drill => self.handle_drill_action(action, now),
        }
    }

    fn handle_drill_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Start => self.session.start(),
            Action::Reset => {
                self.session.reset();
                self.last_input = None;
                self.pressed = None;
            }
            Action::ChangeMode => self.session.change_mode(),
            Action::ToggleHelp => self.mode = AppMode::Help,
            Action::Press(label) => self.press(label, now),
            Action::Quit | Action::None => {}
        }
    }

    fn press(&mut self, label: String, now: Instant) {
        if self.session.submit(&label, now).is_none() {
            return;
        }
        self.pressed = layout_label(&label).map(|k| (k, now + self.press_flash()));
        self.last_input = Some(label);
    }

    /// Fire due session advances and expire the press flash.
    pub fn tick(&mut self, now: Instant) {
        self.session.tick(now);
        if matches!(self.pressed, Some((_, until)) if until <= now) {
            self.pressed = None;
        }
    }

    /// Earliest instant at which `tick` would change something.
    pub fn next_deadline(&self) -> Option<Instant> {
        let flash = self.pressed.as_ref().map(|(_, until)| *until);
        match (self.session.next_deadline(), flash) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Keys the keyboard should highlight for the current target.
    pub fn highlighted(&self) -> BTreeSet<String> {
        self.session
            .current_target
            .map(highlight_keys)
            .unwrap_or_default()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            mode: self.session.mode().name,
            correct: self.session.correct_count,
            total: self.session.total_count,
            accuracy: self.session.accuracy(),
        }
    }

    /// Log the final score. Called once on the way out.
    pub fn finish(&self) -> SessionSummary {
        let summary = self.summary();
        let wrong = summary.total - summary.correct;
        info!("session finished: {summary}, {wrong} wrong");
        summary
    }

    /// Render the application UI.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let keyboard_height = if self.config.display.show_keyboard {
            7
        } else {
            0
        };

        // Layout: [mode panel] [prompt] [keyboard] [filler] [stats bar]
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(keyboard_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_mode_panel(frame, chunks[0]);
        self.render_prompt(frame, chunks[1]);
        if self.config.display.show_keyboard {
            self.render_keyboard(frame, chunks[2]);
        }
        self.render_stats_bar(frame, chunks[4]);

        // Help overlay on top of everything
        if self.mode == AppMode::Help {
            let overlay = HelpOverlayWidget {
                monochrome: self.config.display.monochrome,
            };
            frame.render_widget(overlay, area);
        }
    }

    fn render_mode_panel(&self, frame: &mut Frame, area: Rect) {
        let widget = ModePanelWidget {
            mode: self.session.mode(),
            index: self.session.mode_index,
            count: practice::mode_count(),
            monochrome: self.config.display.monochrome,
        };
        frame.render_widget(widget, area);
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect) {
        let widget = PromptWidget {
            phase: self.session.phase(),
            target: self.session.current_target,
            last_input: self.last_input.as_deref(),
            monochrome: self.config.display.monochrome,
        };
        frame.render_widget(widget, area);
    }

    fn render_keyboard(&self, frame: &mut Frame, area: Rect) {
        let highlighted = self.highlighted();
        let widget = KeyboardWidget {
            highlighted: &highlighted,
            pressed: self.pressed.as_ref().map(|(k, _)| k.as_str()),
            monochrome: self.config.display.monochrome,
        };
        frame.render_widget(widget, area);
    }

    fn render_stats_bar(&self, frame: &mut Frame, area: Rect) {
        let widget = StatsBarWidget {
            mode: self.mode.label(),
            practice: self.session.mode().name,
            accuracy: self.session.accuracy(),
            total: self.session.total_count,
            correct: self.session.correct_count,
            monochrome: self.config.display.monochrome,
        };
        frame.render_widget(widget, area);
    }
}
