//! TUI rendering (impure shell).

pub mod layout;
pub mod segment_modal;
pub mod snackbar;
pub mod styles;

pub use segment_modal::render_segment_modal;
pub use snackbar::render_snackbar;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{SchemaCatalog, SubmitError};
use crate::state::{handle_key, AppState, SegmentBuilder};
use crate::submit::HttpSubmitter;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Longest the loop sleeps without input; shortened to meet a notification deadline.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// HTTP client could not be created
    #[error("Submitter setup failed: {0}")]
    Submitter(#[from] SubmitError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(builder: SegmentBuilder) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state: AppState::new(builder),
            key_bindings: KeyBindings::default(),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q on the landing screen, or Ctrl+C).
    /// Redraws on key input, resize, and when a notification expires.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = self.app_state.builder.poll_timeout(TICK_INTERVAL);
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        self.draw()?;
                    }
                    _ => {}
                }
            }

            if self.app_state.builder.tick() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: event::KeyEvent) -> bool {
        handle_key(&mut self.app_state, &self.key_bindings, key)
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        self.terminal.draw(|frame| {
            layout::render_layout(frame, &self.app_state);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp around an existing terminal (test-only constructor).
    pub(crate) fn new_for_test(terminal: Terminal<B>, builder: SegmentBuilder) -> Self {
        Self {
            terminal,
            app_state: AppState::new(builder),
            key_bindings: KeyBindings::default(),
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn app_state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: event::KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Build the submitter from config and run the TUI until the user quits.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(config: &ResolvedConfig) -> Result<(), TuiError> {
    let submitter = HttpSubmitter::new(config.endpoint.clone(), config.request_timeout)?;
    info!(endpoint = %submitter.endpoint(), "Starting segment builder");

    let builder = SegmentBuilder::new(SchemaCatalog::default(), Box::new(submitter));
    let mut app = TuiApp::new(builder)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
