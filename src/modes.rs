/// Application modes — determines which view is on top and how input is routed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Default: the drill screen, keystrokes go to the session
    #[default]
    Drill,
    /// Help overlay: showing keybinding reference
    Help,
}

impl AppMode {
    /// Human-readable label for the stats bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Drill => "DRILL",
            Self::Help => "HELP",
        }
    }
}
