//! TUI application state and logic

use crate::core::{Direction, Placement, Puzzle};
use crate::hints::{HINT_INTERVAL_SECS, HintScheduler};
use crate::session::{GuessOutcome, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the event loop waits for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Which stage the game is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
    TimedOut,
}

/// Application state
pub struct App {
    pub puzzle: Puzzle,
    pub hints: HintScheduler,
    pub session: Session,
    pub phase: Phase,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    started: Instant,
    last_hint: Instant,
    time_limit: Duration,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(puzzle: Puzzle, time_limit: Duration, mut rng: StdRng) -> Self {
        let hints = HintScheduler::new(&puzzle, &mut rng);
        let session = Session::new(puzzle.word_count());

        Self {
            puzzle,
            hints,
            session,
            phase: Phase::Playing,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Place each word: enter 'row col direction', e.g. '3 7 h'".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!("A hint letter appears every {HINT_INTERVAL_SECS} seconds."),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            started: Instant::now(),
            last_hint: Instant::now(),
            time_limit,
            rng,
        }
    }

    /// Seconds until the countdown expires
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.time_limit.saturating_sub(self.started.elapsed())
    }

    /// The configured session length
    #[must_use]
    pub const fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// The word the player is currently asked to place
    #[must_use]
    pub fn current_target(&self) -> Option<usize> {
        self.session.next_target(&self.puzzle, &self.hints)
    }

    /// Advance time-driven state: countdown, hint cadence, hint solves
    ///
    /// Called once per event-loop iteration; all game logic that does not
    /// depend on a key press lives here.
    pub fn tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }

        if self.remaining().is_zero() {
            self.phase = Phase::TimedOut;
            self.add_message("Time's up!", MessageStyle::Error);
            return;
        }

        if self.last_hint.elapsed() >= Duration::from_secs(HINT_INTERVAL_SECS)
            && self.hints.unrevealed_count() > 0
        {
            self.hints.reveal_next(&self.puzzle, &mut self.rng);
            self.last_hint = Instant::now();
            self.add_message("Hint revealed!", MessageStyle::Info);
        }

        let newly_solved = self.session.absorb_revealed(&self.puzzle, &self.hints);
        for w in newly_solved {
            let text = format!(
                "\"{}\" was fully revealed by hints! Marked as solved.",
                self.puzzle.word(w)
            );
            self.add_message(&text, MessageStyle::Success);
        }

        if self.session.is_complete() {
            self.phase = Phase::Won;
            self.add_message("All words placed!", MessageStyle::Success);
        }
    }

    /// Evaluate the guess currently in the input buffer
    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.trim().to_string();
        self.input_buffer.clear();

        let Some(target) = self.current_target() else {
            return;
        };

        let Some(guess) = parse_guess(&input, self.puzzle.grid().size()) else {
            self.add_message(
                "Could not read that guess. Use 'row col direction', e.g. '3 7 h'",
                MessageStyle::Error,
            );
            return;
        };

        match self.session.guess(&self.puzzle, &mut self.hints, target, guess) {
            GuessOutcome::Correct => {
                let text = format!("Correct! \"{}\" placed.", self.puzzle.word(target));
                self.add_message(&text, MessageStyle::Success);
            }
            GuessOutcome::Incorrect => {
                self.add_message("Incorrect. Try again.", MessageStyle::Error);
            }
            GuessOutcome::AlreadySolved => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }
}

/// Parse a 'row col direction' guess line
///
/// Rejects extra tokens and out-of-range coordinates.
#[must_use]
pub fn parse_guess(input: &str, size: usize) -> Option<Placement> {
    let mut parts = input.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    let direction = Direction::parse(parts.next()?)?;

    if parts.next().is_some() || row >= size || col >= size {
        return None;
    }

    Some(Placement::new(row, col, direction))
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so the countdown and hint cadence advance without input
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.phase {
                    Phase::Won | Phase::TimedOut => match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('q') => {
                            app.should_quit = true;
                        }
                        _ => {
                            // Game over; ignore other keys
                        }
                    },
                    Phase::Playing => match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('q') => {
                            app.should_quit = true;
                        }
                        KeyCode::Esc => {
                            app.input_buffer.clear();
                        }
                        KeyCode::Char(c) => {
                            if app.input_buffer.len() < 16 {
                                app.input_buffer.push(c);
                            }
                        }
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => {
                            app.submit_guess();
                        }
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
