//! TUI rendering with ratatui
//!
//! Layout is computed by `screen_layout` so the event loop can hit-test the
//! YES/NO buttons against exactly what was drawn.

use super::app::{App, MessageStyle};
use crate::core::MAX_BAD_GUESSES;
use crate::output::formatters::{gallows, lives_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// A clickable answer button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub answer: bool,
    pub area: Rect,
}

impl Button {
    /// Check whether a mouse position falls inside the button
    #[must_use]
    pub fn is_clicked(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}

/// Screen regions for one frame
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub header: Rect,
    pub gallows: Rect,
    pub prompt: Rect,
    pub yes: Button,
    pub no: Button,
    pub messages: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    #[must_use]
    pub const fn buttons(&self) -> [Button; 2] {
        [self.yes, self.no]
    }
}

/// Split the terminal area into panels
#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Conversation
        ])
        .split(rows[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Prompt
            Constraint::Length(3), // Buttons
            Constraint::Min(3),    // Messages
        ])
        .split(columns[1]);

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(10),
            Constraint::Length(2),
            Constraint::Length(10),
            Constraint::Min(0),
        ])
        .split(right[1]);

    ScreenLayout {
        header: rows[0],
        gallows: columns[0],
        prompt: right[0],
        yes: Button {
            label: "YES",
            answer: true,
            area: button_row[1],
        },
        no: Button {
            label: "NO",
            answer: false,
            area: button_row[3],
        },
        messages: right[2],
        status: rows[2],
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let layout = screen_layout(f.area());

    render_header(f, layout.header);
    render_gallows(f, app, layout.gallows);
    render_prompt(f, app, layout.prompt);
    if app.session.prompt().wants_yes_no {
        for button in layout.buttons() {
            render_button(f, &button);
        }
    }
    render_messages(f, app, layout.messages);
    render_status(f, app, layout.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN SOLVER - Think of a word, I'll guess it")
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

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let bad_guesses = app.session.bad_guess_count();
    let color = match bad_guesses {
        0..=3 => Color::White,
        b if b < MAX_BAD_GUESSES => Color::Yellow,
        _ => Color::Red,
    };

    let mut lines: Vec<Line> = gallows(bad_guesses)
        .into_iter()
        .map(|row| Line::styled(row, Style::default().fg(color)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "[{}] {bad_guesses}/{MAX_BAD_GUESSES}",
        lives_bar(bad_guesses, MAX_BAD_GUESSES)
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Wrong Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_prompt(f: &mut Frame, app: &App, area: Rect) {
    let color = if app.session.is_finished() {
        Color::Green
    } else {
        Color::Yellow
    };

    let mut spans = vec![Span::styled(
        app.prompt_line(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if app.session.state().wants_number() {
        spans.push(Span::styled("_", Style::default().fg(Color::DarkGray)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Question ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

fn render_button(f: &mut Frame, button: &Button) {
    let color = if button.answer {
        Color::Green
    } else {
        Color::Red
    };

    let widget = Paragraph::new(button.label)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, button.area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let candidates_text = format!("Candidates: {}", app.session.candidates().len());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[0]);

    let stats_text = format!(
        "Games: {} | Named: {}",
        app.stats.total_games, app.stats.words_named
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.session.is_finished() {
        "q: Quit | r: New Game"
    } else if app.session.prompt().wants_yes_no {
        "q: Quit | y/n or click: Answer"
    } else {
        "q: Quit | digits + Enter: Submit | Backspace: Edit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_places_buttons_side_by_side() {
        let layout = screen_layout(Rect::new(0, 0, 100, 30));

        assert_eq!(layout.yes.area.width, 10);
        assert_eq!(layout.no.area.width, 10);
        assert_eq!(layout.yes.area.y, layout.no.area.y);
        assert!(layout.yes.area.x < layout.no.area.x);
        assert!(layout.yes.answer);
        assert!(!layout.no.answer);
    }

    #[test]
    fn button_hit_testing() {
        let layout = screen_layout(Rect::new(0, 0, 100, 30));
        let yes = layout.yes.area;

        assert!(layout.yes.is_clicked(yes.x, yes.y));
        assert!(layout.yes.is_clicked(yes.x + yes.width - 1, yes.y + yes.height - 1));
        assert!(!layout.yes.is_clicked(yes.x + yes.width, yes.y));
        assert!(!layout.no.is_clicked(yes.x, yes.y));
    }

    #[test]
    fn buttons_sit_below_prompt() {
        let layout = screen_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.yes.area.y, layout.prompt.y + layout.prompt.height);
    }
}
