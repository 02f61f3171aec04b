//! TUI rendering with ratatui
//!
//! Candidate list, guess history and the known letter constraints.

use super::app::{App, MessageStyle};
use crate::core::{Color as Feedback, Guess};
use crate::output::formatters::{absent_letters, known_pattern, present_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Candidates
            Constraint::Percentage(60), // History, rules, messages
        ])
        .split(chunks[1]);

    render_candidates(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE HINTS - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.solver.candidates();
    let visible = usize::from(area.height.saturating_sub(2));

    let items: Vec<ListItem> = if candidates.is_empty() {
        vec![ListItem::new("No candidates remain").style(Style::default().fg(Color::Red))]
    } else {
        candidates
            .iter()
            .enumerate()
            .skip(app.scroll)
            .take(visible)
            .map(|(i, word)| ListItem::new(format!("{:>5}  {}", i + 1, word.text().to_uppercase())))
            .collect()
    };

    let title = format!(" Candidates ({}) ", candidates.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // History
            Constraint::Length(5), // Rules
            Constraint::Length(3), // Search space gauge
            Constraint::Length(8), // Messages
        ])
        .split(area);

    render_history(f, app, chunks[0]);
    render_rules(f, app, chunks[1]);
    render_search_progress(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn guess_line(index: usize, guess: &Guess) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{index:>2}. "))];
    for (_, letter, color) in guess.hints() {
        let bg = match color {
            Feedback::Green => Color::Green,
            Feedback::Yellow => Color::Yellow,
            Feedback::Black => Color::DarkGray,
        };
        spans.push(Span::styled(
            format!(" {} ", letter.to_ascii_uppercase()),
            Style::default()
                .fg(Color::Black)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.solver.history();
    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new("No hints yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        history
            .iter()
            .enumerate()
            .map(|(i, guess)| ListItem::new(guess_line(i + 1, guess)))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Hints ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_rules(f: &mut Frame, app: &App, area: Rect) {
    let rules = app.solver.rules();
    let present = present_letters(rules);

    let content = vec![
        Line::from(vec![
            Span::raw("Known:   "),
            Span::styled(
                known_pattern(rules),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Present: "),
            Span::styled(present.join(", "), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::raw("Absent:  "),
            Span::styled(absent_letters(rules), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.dictionary.len();
    let remaining = app.solver.candidates().len();
    let eliminated = if total == 0 {
        0.0
    } else {
        1.0 - remaining as f64 / total as f64
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(eliminated.clamp(0.0, 1.0))
        .label(format!("{remaining} of {total} words remain"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Command (hint <word> <colors> | list | info | new | help | quit) ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let status = format!(
        "Dictionary: {} | Candidates: {} | Hints: {} | ↑/↓ PgUp/PgDn: scroll | Esc: quit",
        app.dictionary.len(),
        app.solver.candidates().len(),
        app.solver.history().len()
    );
    let paragraph = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}
