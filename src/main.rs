use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use keydrill::app::App;
use keydrill::config::{self, AppConfig};
use keydrill::drill::clock::{Clock, SystemClock};
use keydrill::drill::practice;

/// Upper bound on how long the loop sleeps waiting for input.
const MAX_POLL: Duration = Duration::from_millis(50);

/// keydrill — terminal typing drills
///
/// Shows one target key at a time and scores every keystroke against it.
/// Ctrl+S starts, Ctrl+N cycles the practice mode, Ctrl+R resets, Ctrl+C quits.
#[derive(Parser, Debug)]
#[command(name = "keydrill", version, about, long_about = None)]
struct Cli {
    /// Initial practice mode: 1-based index or exact name
    #[arg(short = 'm', long = "mode", value_name = "NAME|INDEX")]
    mode: Option<String>,

    /// Print the practice modes and exit
    #[arg(long = "list-modes")]
    list_modes: bool,

    /// Delay after a correct key before the next target (ms)
    #[arg(long = "success-delay-ms", value_name = "MS")]
    success_delay_ms: Option<u64>,

    /// Delay after a wrong key before the next target (ms)
    #[arg(long = "error-delay-ms", value_name = "MS")]
    error_delay_ms: Option<u64>,

    /// Monochrome output (no colors)
    #[arg(short = 'M', long = "monochrome")]
    monochrome: bool,

    /// Hide the on-screen keyboard
    #[arg(long = "no-keyboard")]
    no_keyboard: bool,

    /// Print the exit summary as JSON
    #[arg(long = "summary-json")]
    summary_json: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long = "write-config")]
    write_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_modes {
        print!("{}", practice::list_modes());
        return Ok(());
    }

    let config = effective_config(&cli);

    if cli.write_config {
        config::save_config(&config).context("Failed to write config file")?;
        if let Some(path) = config::config_file_path() {
            println!("Wrote {}", path.display());
        }
        return Ok(());
    }

    let session = config.build_session()?;
    let mut app = App::new(session, config);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &mut app, &SystemClock);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    let summary = app.finish();
    println!("{}", summary.render(cli.summary_json)?);

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    clock: &impl Clock,
) -> Result<()> {
    loop {
        app.tick(clock.now());
        terminal.draw(|frame| app.render(frame))?;

        if app.should_quit {
            break;
        }

        // Wake up early when a feedback window or key flash is about to end
        let timeout = app
            .next_deadline()
            .map(|due| due.saturating_duration_since(clock.now()).min(MAX_POLL))
            .unwrap_or(MAX_POLL);

        if event::poll(timeout)? {
            let evt = event::read()?;
            if let Event::Key(_) = evt {
                app.handle_event(evt, clock.now());
            } else if let Event::Resize(_, _) = evt {
                // Terminal will redraw on next loop iteration
            }
        }
    }

    Ok(())
}

/// Config file values with command-line overrides applied.
fn effective_config(cli: &Cli) -> AppConfig {
    let mut config = config::load_config();
    if let Some(ms) = cli.success_delay_ms {
        config.timing.success_delay_ms = ms;
    }
    if let Some(ms) = cli.error_delay_ms {
        config.timing.error_delay_ms = ms;
    }
    if cli.monochrome {
        config.display.monochrome = true;
    }
    if cli.no_keyboard {
        config.display.show_keyboard = false;
    }
    if cli.mode.is_some() {
        config.practice.default_mode = cli.mode.clone();
    }
    config
}
