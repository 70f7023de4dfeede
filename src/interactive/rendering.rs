//! TUI rendering with ratatui
//!
//! Board, autocomplete and status panels for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Classification, LetterMark};
use crate::engine::{Feedback, GameKind, GuessAttempt, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const NAME_WIDTH: usize = 16;
const CELL_WIDTH: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(70), // Board
            Constraint::Percentage(30), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🎯 {} {}", app.game.name(), app.day_label))
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

const fn classification_style(class: Classification) -> Style {
    match class {
        Classification::ExactMatch => Style::new().fg(Color::Black).bg(Color::Green),
        Classification::Higher | Classification::Lower => {
            Style::new().fg(Color::Black).bg(Color::Yellow)
        }
        Classification::Invalid | Classification::NoMatch => {
            Style::new().fg(Color::White).bg(Color::DarkGray)
        }
    }
}

const fn letter_style(mark: LetterMark) -> Style {
    match mark {
        LetterMark::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        LetterMark::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        LetterMark::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}

fn fit(text: &str, width: usize) -> String {
    let short: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{short:^width$}")
}

fn attempt_line(attempt: &GuessAttempt) -> Line<'static> {
    match &attempt.feedback {
        Feedback::Attributes(classes) => {
            let mut spans = vec![Span::styled(
                format!("{:<NAME_WIDTH$}", fit(attempt.guess.display_name(), NAME_WIDTH)),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            for (i, &class) in classes.iter().enumerate() {
                let value = attempt.guess.attribute(i);
                let label = format!("{} {}", value, class.symbol());
                spans.push(Span::styled(
                    fit(&label, CELL_WIDTH),
                    classification_style(class),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        }
        Feedback::Letters(marks) => Line::from(
            attempt
                .guess
                .normalized_key()
                .chars()
                .zip(marks)
                .flat_map(|(letter, &mark)| {
                    [
                        Span::styled(
                            format!(" {letter} "),
                            letter_style(mark).add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect::<Vec<_>>(),
        ),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if app.game.kind() == GameKind::Clues {
        let mut header = vec![Span::raw(format!("{:<NAME_WIDTH$}", "Name"))];
        for spec in app.game.specs() {
            header.push(Span::styled(
                fit(spec.name(), CELL_WIDTH),
                Style::default().fg(Color::Cyan),
            ));
            header.push(Span::raw(" "));
        }
        lines.push(Line::from(header));
        lines.push(Line::from(""));
    }

    for attempt in app.session.attempts() {
        lines.push(attempt_line(attempt));
        lines.push(Line::from(""));
    }

    let remaining = app.game.budget().saturating_sub(app.session.len());
    for _ in 0..remaining {
        lines.push(Line::from(Span::styled(
            "·".repeat(NAME_WIDTH),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    if app.input_mode == InputMode::Finished {
        let (text, color) = if app.session.status() == Status::Won {
            (format!("🎉 {}!", app.target.display_name()), Color::Green)
        } else {
            (format!("The answer was {}", app.target.display_name()), Color::Red)
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Budget gauge
            Constraint::Percentage(45), // Suggestions
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_budget(f, app, chunks[0]);
    render_suggestions(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_budget(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.len();
    let budget = app.game.budget().max(1);
    let percent = u16::try_from(used * 100 / budget).unwrap_or(100).min(100);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Guesses used "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{}", app.game.budget()));

    f.render_widget(gauge, area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let style = if app.selected == Some(i) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if app.session.has_guessed(&crate::core::normalize_key(name)) {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(name.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Suggestions ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
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
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " Round over | Press 'n' for a practice round or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            match app.game.kind() {
                GameKind::Clues => " Guess a character | ↑↓ select, TAB complete, Enter submit ",
                GameKind::Letters => " Guess a word | Enter submit ",
            },
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = format!("Round: {}", app.day_label);
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let attempts_text = format!("Attempts: {}/{}", app.session.len(), app.game.budget());
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[2]);

    let help_text = if app.input_mode == InputMode::Finished {
        "q: Quit | n: Practice"
    } else {
        "Esc: Quit | Enter: Submit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::Series;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn renders_board_with_guesses() {
        let game = Series::Naruto.load().unwrap();
        let target = game.resolve_guess("Gaara").unwrap();
        let mut app = App::new(&game, target, "#7");
        app.input_buffer = "Temari".to_string();
        app.submit_input();

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Naruto Fandle #7"));
        assert!(text.contains("Temari"));
        assert!(text.contains("Attempts: 1/6"));
    }

    #[test]
    fn fit_centres_and_truncates() {
        assert_eq!(fit("Age", 7), "  Age  ");
        assert_eq!(fit("Konohamaru", 6), "Konoh ");
    }
}
