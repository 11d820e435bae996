//! TUI rendering with ratatui
//!
//! Full-screen layout for the crossword session: puzzle grid, word sidebar,
//! countdown gauge, and guess input line.

use super::app::{App, Message, MessageStyle, Phase};
use crate::core::Coord;
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
            Constraint::Min(18),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Countdown
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Grid panel
            Constraint::Percentage(40), // Sidebar
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_sidebar(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_countdown(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 WORDWEAVE - Crossword Puzzle")
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

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let display = app.hints.display();
    let size = display.size();

    let mut lines = Vec::with_capacity(size + 1);

    // Column header
    let mut header_spans = vec![Span::raw("    ")];
    for col in 0..size {
        header_spans.push(Span::styled(
            format!("{col:2} "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(header_spans));

    for row in 0..size {
        let mut spans = vec![Span::styled(
            format!("{row:2} |"),
            Style::default().fg(Color::DarkGray),
        )];

        for col in 0..size {
            let coord = Coord::new(row, col);
            let span = match display.letter(coord) {
                Some(letter) => Span::styled(
                    format!("{:>2} ", char::from(letter)),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Puzzle ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(grid, area);
}

fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Word list
            Constraint::Percentage(45), // Messages
        ])
        .split(area);

    render_words(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let target = app.current_target();

    let items: Vec<ListItem> = (0..app.puzzle.word_count())
        .map(|w| {
            let text = app.puzzle.word(w).text();
            let (prefix, style) = if app.session.is_solved(w) {
                ("✓ ", Style::default().fg(Color::Green))
            } else if target == Some(w) {
                (
                    "▶ ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            ListItem::new(format!("{prefix}{text}")).style(style)
        })
        .collect();

    let title = format!(
        " Words ({}/{} solved) ",
        app.session.score(),
        app.session.word_count()
    );
    let words = List::new(items).block(Block::default().title(title).borders(Borders::ALL));

    f.render_widget(words, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg: &Message| {
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
    let (title, content, color) = match app.phase {
        Phase::Won => (
            " 🎉 ALL WORDS PLACED! 🎉 | Press 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        Phase::TimedOut => (
            " ⏰ TIME'S UP! | Press 'q' to quit ".to_string(),
            String::new(),
            Color::Red,
        ),
        Phase::Playing => {
            let prompt = app.current_target().map_or_else(
                || " Waiting for hints to finish... ".to_string(),
                |w| format!(" Place {} (row col h/v) ", app.puzzle.word(w)),
            );
            (prompt, app.input_buffer.clone(), Color::Yellow)
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_countdown(f: &mut Frame, app: &App, area: Rect) {
    let total = app.time_limit().as_secs().max(1);
    let left = app.remaining().as_secs();
    let percent = (left * 100 / total).min(100) as u16;

    let color = if percent > 50 {
        Color::Green
    } else if percent > 20 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time Remaining ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!(
            "{:02}:{:02} | {} letters still hidden",
            left / 60,
            left % 60,
            app.hints.unrevealed_count()
        ));

    f.render_widget(gauge, area);
}
