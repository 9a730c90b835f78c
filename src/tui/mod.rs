//! Terminal demo: a transactions page driving two controlled dialogs

mod colors;
mod dialogs;
mod event;
mod page;
mod render;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use dialog_shell::{Config, EventStatus};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{
            DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
            KeyEventKind,
        },
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    layout::Rect,
};
use std::io;
use tracing::{debug, info};

use event::{Event, Handler};
use page::Page;

/// Demo application state
#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub page: Page,
    pub should_quit: bool,
}

impl App {
    /// Create the demo with mock data relative to `today`
    #[must_use]
    pub fn new(config: Config, today: NaiveDate) -> Self {
        Self {
            config,
            page: Page::new(today),
            should_quit: false,
        }
    }
}

/// Run the TUI demo
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to
pub fn run(config: Config) -> Result<()> {
    let mut app = App::new(config, Local::now().date_naive());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.tick_rate_ms);
    info!(tick_rate = ?event_handler.tick_rate(), "Demo started");

    let result = run_loop(&mut terminal, &mut app, event_handler);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: Handler,
) -> Result<()> {
    let mut area = Rect::default();

    loop {
        terminal.draw(|frame| {
            area = frame.area();
            render::render(frame, app);
        })?;

        match event_handler.next()? {
            Event::Tick => app.page.tick(),
            Event::Input(input) => handle_input(app, &input, area),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Route input to the open dialog first; the page only sees what it ignores.
fn handle_input(app: &mut App, input: &CrosstermEvent, area: Rect) {
    let keys = &app.config.keys;
    let defaults = app.config.dialog;
    let page = &mut app.page;

    if page.new_tx.open {
        let dialog = dialogs::new_transaction(keys, defaults, page);
        let status = dialog.handle_event(input, area, &mut page.new_state, &mut page.new_tx);
        if status == EventStatus::Ignored {
            let field = page.new_state.body_focus();
            let _edited = page.edit_form(input, field);
        }
        return;
    }

    if page.delete.open {
        let dialog = dialogs::delete_transaction(keys, defaults, page);
        let status = dialog.handle_event(input, area, &mut page.delete_state, &mut page.delete);
        if status == EventStatus::Ignored
            && let CrosstermEvent::Key(key) = input
            && key.kind != KeyEventKind::Release
        {
            match key.code {
                KeyCode::Char('y') => page.confirm_delete(),
                KeyCode::Char('n') => page.delete.open = false,
                _ => {}
            }
        }
        return;
    }

    handle_page_key(app, input);
}

fn handle_page_key(app: &mut App, input: &CrosstermEvent) {
    let CrosstermEvent::Key(key) = input else {
        return;
    };
    if key.kind == KeyEventKind::Release {
        return;
    }

    let page = &mut app.page;
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('n') => page.open_new(),
        KeyCode::Char('d') => page.open_delete(),
        KeyCode::Char('f') => page.toggle_fullscreen(),
        KeyCode::Char('j') | KeyCode::Down => page.select_next(),
        KeyCode::Char('k') | KeyCode::Up => page.select_prev(),
        _ => {}
    }
}
