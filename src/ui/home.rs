//! Home screen rendering
//!
//! Word-count limit selector and category list.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, HOME_OPTIONS};
use crate::deck::{expected_deck_len, WordLimit};

use super::helpers::{centered_rect, inner_rect};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_MUTED};

/// Width of the home content column
const CONTENT_WIDTH: u16 = 64;

/// Render the complete home screen
pub fn render_home(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer_block, size);

    let inner = inner_rect(size, 1);
    let column = centered_rect(inner, CONTENT_WIDTH, inner.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title
            Constraint::Length(5), // Limit selector
            Constraint::Length(1), // Spacer
            Constraint::Min(6),    // Categories
            Constraint::Length(1), // Keybind hints
        ])
        .split(column);

    render_title(frame, chunks[0]);
    render_limit_selector(frame, chunks[1], app.limit);
    render_categories(frame, chunks[3], app);
    render_home_hints(frame, chunks[4]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Quranic",
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Flash",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Master Quranic Vocabulary",
            Style::default().fg(COLOR_HEADER),
        )),
        Line::from(Span::styled(
            "Choose how many words to study per category, then select a topic.",
            Style::default().fg(COLOR_MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_limit_selector(frame: &mut Frame, area: Rect, limit: WordLimit) {
    let block = Block::default()
        .title(Span::styled(
            " Words per Category ",
            Style::default().fg(COLOR_MUTED).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let mut presets: Vec<Span> = Vec::new();
    for (i, preset) in WordLimit::PRESETS.iter().enumerate() {
        if i > 0 {
            presets.push(Span::raw("   "));
        }
        if *preset == limit.get() {
            presets.push(Span::styled(
                format!("[{}]", preset),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ));
        } else {
            presets.push(Span::styled(
                format!(" {} ", preset),
                Style::default().fg(COLOR_MUTED),
            ));
        }
    }

    let lines = vec![
        Line::from(presets),
        Line::from(""),
        Line::from(Span::styled(
            format!("Loads the {limit} most frequent words of the chosen category."),
            Style::default().fg(COLOR_DIM),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}

fn render_categories(frame: &mut Frame, area: Rect, app: &App) {
    let store = app.session.store();
    let mut lines: Vec<Line> = Vec::new();

    for (i, option) in HOME_OPTIONS.iter().enumerate() {
        let selected = i == app.home_cursor;
        let marker = if selected { "›" } else { " " };
        let title_style = if selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_HEADER)
        };
        let available = expected_deck_len(store, option.selector, app.limit.get());

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), Style::default().fg(COLOR_ACCENT)),
            Span::styled(format!("{} ", i + 1), Style::default().fg(COLOR_DIM)),
            Span::styled(format!("{}  ", option.icon), Style::default().fg(COLOR_MUTED)),
            Span::styled(format!("{:<18}", option.title), title_style),
            Span::styled(option.description(app.limit), Style::default().fg(COLOR_MUTED)),
            Span::styled(format!("  ({} available)", available), Style::default().fg(COLOR_DIM)),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_home_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::from(Span::styled(
        "↑/↓ choose   ←/→ word count   Enter or 1-4 start   q quit",
        Style::default().fg(COLOR_DIM),
    ));
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), area);
}
