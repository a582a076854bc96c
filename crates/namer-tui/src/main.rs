use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use namer_core::{generator::RandomWordPairs, settings::Settings, theme::Theme, Namer};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use tracing::{error, info};

mod events;
mod logging;
mod ui;

use events::EventHandler;
use ui::app::App;

fn main() -> Result<()> {
    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            Settings::default()
        }
    };
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    info!(?settings, "starting namer");

    let source = match settings.seed {
        Some(seed) => RandomWordPairs::seeded(seed),
        None => RandomWordPairs::new(),
    }
    .with_max_syllables(settings.max_syllables);

    let mut app = App::new(Namer::new(source), Theme::new(settings.theme));
    let mut terminal = init_terminal()?;

    let result = app.run(&mut terminal, &EventHandler::default());
    let restored = restore_terminal(&mut terminal);
    finish(result, restored)
}

/// Logs both outcomes. The run error takes precedence over a restore error.
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(e) = &result {
        error!("namer stopped: {:#}", e);
    }
    if let Err(e) = &restored {
        error!("failed to restore terminal: {:#}", e);
    }
    result.and(restored)
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_run_error_survives_restore_failure() {
        let err = finish(Err(anyhow!("feed exhausted")), Err(anyhow!("tty gone"))).unwrap_err();
        assert_eq!(err.to_string(), "feed exhausted");
    }

    #[test]
    fn test_restore_failure_reported_after_clean_run() {
        let err = finish(Ok(()), Err(anyhow!("tty gone"))).unwrap_err();
        assert_eq!(err.to_string(), "tty gone");
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
