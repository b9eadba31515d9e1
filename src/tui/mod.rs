pub mod animation;
pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

/// Roughly 30 redraws per second keeps the count-up smooth
const TICK_RATE_MS: u64 = 33;

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer log output while TUI is active to prevent it corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(TICK_RATE_MS);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(e.into());
        }

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    ratatui::restore();

    // Flush buffered messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if app.input_mode == app::InputMode::Help {
        // Any key exits help
        app.dismiss_help();
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('d') => app.toggle_theme(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,

        // Calculator switching
        KeyCode::Tab | KeyCode::BackTab => app.switch_tab(),

        // Field navigation
        KeyCode::Down => app.next_field(),
        KeyCode::Up => app.previous_field(),

        // Grade picker
        KeyCode::Right => app.cycle_grade(true),
        KeyCode::Left => app.cycle_grade(false),

        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.backspace(),

        KeyCode::Char('?') => app.show_help(),
        KeyCode::Char(c) => app.input_char(c),

        _ => {}
    }
}
