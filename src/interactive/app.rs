//! TUI application state and logic

use crate::commands::{Command, HELP};
use crate::output::formatters::{absent_letters, known_pattern, present_letters};
use crate::solver::Solver;
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Number of messages kept for the messages panel
const MAX_MESSAGES: usize = 8;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub solver: Solver<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub scroll: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            solver: Solver::new(dictionary),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Loaded {} words.", dictionary.len()),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type 'hint <word> <colors>', e.g. 'hint crane bbggb'".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            scroll: 0,
            should_quit: false,
        }
    }

    /// Parse and run the current input line
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        match Command::parse(&input) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn execute(&mut self, command: Command) {
        debug!(target: "session", "command: {command:?}");

        match command {
            Command::Hint(guess) => {
                if !self.dictionary.contains(guess.word().text()) {
                    self.add_message(
                        &format!("Note: '{}' is not in the dictionary", guess.word()),
                        MessageStyle::Info,
                    );
                }
                let solved = guess.is_solved();
                let removed = self.solver.apply_guess(guess);
                let remaining = self.solver.candidates().len();
                self.scroll = 0;

                if remaining == 0 {
                    self.add_message(
                        "No candidates remain - check the hints, or 'new' to start over.",
                        MessageStyle::Error,
                    );
                } else if solved || remaining == 1 {
                    let answer = self.solver.candidates()[0].text().to_uppercase();
                    self.add_message(&format!("🎉 The answer is {answer}!"), MessageStyle::Success);
                } else {
                    self.add_message(
                        &format!("{remaining} candidates remaining ({removed} removed)"),
                        MessageStyle::Info,
                    );
                }
            }
            Command::List => {
                self.scroll = 0;
                self.add_message(
                    &format!("{} options", self.solver.candidates().len()),
                    MessageStyle::Info,
                );
            }
            Command::Info => {
                let rules = self.solver.rules();
                let mut lines = vec![
                    format!("Dictionary size: {}", self.dictionary.len()),
                    format!("Known: {}", known_pattern(rules)),
                ];
                let present = present_letters(rules);
                if !present.is_empty() {
                    lines.push(format!("Present: {}", present.join(", ")));
                }
                let absent = absent_letters(rules);
                if !absent.is_empty() {
                    lines.push(format!("Absent: {absent}"));
                }
                for line in lines {
                    self.add_message(&line, MessageStyle::Info);
                }
            }
            Command::New => self.new_game(),
            Command::Help => {
                for (usage, description) in HELP.iter().filter(|(usage, _)| !usage.is_empty()) {
                    self.add_message(&format!("{usage}: {description}"), MessageStyle::Info);
                }
            }
            Command::Quit => self.should_quit = true,
        }
    }

    pub fn new_game(&mut self) {
        self.solver = Solver::new(self.dictionary);
        self.scroll = 0;
        self.messages.clear();
        self.add_message(
            &format!("New session: {} candidates", self.dictionary.len()),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.solver.candidates().len().saturating_sub(1);
        self.scroll = (self.scroll + lines).min(max);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char(c) => app.input_buffer.push(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit(),
                KeyCode::Down => app.scroll_down(1),
                KeyCode::Up => app.scroll_up(1),
                KeyCode::PageDown => app.scroll_down(10),
                KeyCode::PageUp => app.scroll_up(10),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
