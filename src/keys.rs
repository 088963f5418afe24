use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// High-level actions derived from keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start (or restart) practising
    Start,
    /// Stop practising and clear counters
    Reset,
    /// Cycle to the next practice mode
    ChangeMode,
    /// Toggle help overlay
    ToggleHelp,
    /// Exit the program
    Quit,
    /// A keystroke to score, carrying its key label
    Press(String),
    /// No-op
    None,
}

/// Map a crossterm KeyEvent to an Action.
///
/// Controls live on Ctrl chords and F1 so that every plain key, Esc and
/// Enter included, reaches the drill as a keystroke.
pub fn map_key_event(event: KeyEvent) -> Action {
    if event.kind == KeyEventKind::Release {
        return Action::None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

    match event.code {
        KeyCode::Char('s') if ctrl => Action::Start,
        KeyCode::Char('r') if ctrl => Action::Reset,
        KeyCode::Char('n') if ctrl => Action::ChangeMode,
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Action::Quit,
        KeyCode::Char(_) if ctrl => Action::None,
        KeyCode::F(1) => Action::ToggleHelp,

        code => key_label(code).map_or(Action::None, Action::Press),
    }
}

/// Label delivered to the drill for a key code, mirroring browser key names.
pub fn key_label(code: KeyCode) -> Option<String> {
    let label = match code {
        KeyCode::Char(c) => return Some(c.to_string()),
        KeyCode::Enter => "Enter",
        KeyCode::Tab => "Tab",
        KeyCode::BackTab => "Tab",
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Esc => "Esc",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Insert => "Insert",
        KeyCode::F(n) => return Some(format!("F{n}")),
        _ => return None,
    };
    Some(label.to_string())
}
