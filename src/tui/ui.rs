//! Stateless UI rendering for word scramble.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use super::app::App;
use crate::rules_text;

/// Preferred width of the rules popup, borders included.
const RULES_WIDTH: u16 = 76;

/// Renders the whole screen, overlays included.
pub fn draw<R>(frame: &mut Frame, app: &App<R>) {
    let session = app.session();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Word list
            Constraint::Length(3), // Score
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(session.root_word().to_string())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Root word"));
    frame.render_widget(title, chunks[0]);

    let input = Paragraph::new(format!("{}_", session.pending_input()))
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title("Enter your word"));
    frame.render_widget(input, chunks[1]);

    let items: Vec<ListItem> = session
        .used_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("({}) ", word.letter_count()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(word.as_str()),
            ]))
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Words"));
    frame.render_widget(list, chunks[2]);

    let score = Paragraph::new(format!("Score: {}   {}", session.score(), app.status_message()))
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(score, chunks[3]);

    let help = Paragraph::new("Enter: Submit | F1/?: Rules | F5/Ctrl-R: Restart | Esc: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if app.show_rules() {
        draw_rules(frame, app);
    }
    if *session.error().visible() {
        draw_error(frame, app);
    }
}

fn draw_rules<R>(frame: &mut Frame, app: &App<R>) {
    let text = rules_text(app.session().rules());
    let width = RULES_WIDTH.min(frame.area().width);
    let inner_width = width.saturating_sub(2);
    // Rules, a blank line and the close button, inside the border
    let body_height: u16 = text.iter().map(|line| wrapped_height(line, inner_width)).sum();
    let popup = center_rect(frame.area(), width, body_height + 4);

    let lines: Vec<Line> = text
        .into_iter()
        .map(Line::from)
        .chain([Line::from(""), Line::from("[ Close ]").alignment(Alignment::Center)])
        .collect();
    frame.render_widget(Clear, popup);
    let rules = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Rules"));
    frame.render_widget(rules, popup);
}

/// Rows `text` takes when word-wrapped to `width` columns.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 1;
    let mut used = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if used == 0 {
            rows += len.saturating_sub(1) / width;
            used = (len - 1) % width + 1;
        } else if used + 1 + len <= width {
            used += 1 + len;
        } else {
            rows += 1 + len.saturating_sub(1) / width;
            used = (len - 1) % width + 1;
        }
    }
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn draw_error<R>(frame: &mut Frame, app: &App<R>) {
    let error = app.session().error();
    let popup = center_rect(frame.area(), 50, 7);
    frame.render_widget(Clear, popup);
    let body = Paragraph::new(vec![
        Line::from(error.message().as_str()),
        Line::from(""),
        Line::from("[ OK ]").alignment(Alignment::Center),
    ])
    .wrap(Wrap { trim: true })
    .style(Style::default().fg(Color::Red))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(error.title().as_str()),
    );
    frame.render_widget(body, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
