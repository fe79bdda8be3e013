//! Study screen rendering
//!
//! Top bar with session info, the flashcard (or a loading / empty
//! placeholder), and the control bar.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::session::Session;
use crate::vocabulary::WordEntry;

use super::helpers::{centered_rect, inner_rect, spinner_frame, truncate_to_width};
use super::theme::{
    COLOR_ACCENT, COLOR_ARABIC, COLOR_BORDER, COLOR_DIM, COLOR_DISABLED, COLOR_EXAMPLE,
    COLOR_GLOSS, COLOR_HEADER, COLOR_MUTED, COLOR_TRANSLITERATION,
};

pub const LOADING_TEXT: &str = "Preparing your deck...";
pub const EMPTY_DECK_TEXT: &str = "No words found for this configuration.";

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 16;

/// Render the complete study screen
pub fn render_study(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Top bar
            Constraint::Min(5),    // Card area
            Constraint::Length(3), // Controls
        ])
        .split(size);

    render_top_bar(frame, chunks[0], &app.session);
    render_card_area(frame, chunks[1], app);
    render_controls(frame, chunks[2], &app.session);
}

fn render_top_bar(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(10),
            Constraint::Length(12),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled("← Back", Style::default().fg(COLOR_MUTED))),
        columns[0],
    );

    let label = session.selector().map(|s| s.label()).unwrap_or_default();
    let center = vec![
        Line::from(Span::styled(
            label.to_uppercase(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Top {} Filter", session.limit()),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(center).alignment(Alignment::Center), columns[1]);

    let counter = Line::from(vec![
        Span::styled(session.position().to_string(), Style::default().fg(COLOR_MUTED)),
        Span::styled(" / ", Style::default().fg(COLOR_DIM)),
        Span::styled(session.len().to_string(), Style::default().fg(COLOR_MUTED)),
    ]);
    frame.render_widget(Paragraph::new(counter).alignment(Alignment::Right), columns[2]);
}

fn render_card_area(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;

    if session.is_loading() {
        let placeholder = centered_rect(area, CARD_WIDTH, 3);
        let line = Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(app.tick_count)),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::styled(LOADING_TEXT, Style::default().fg(COLOR_ACCENT)),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), placeholder);
        return;
    }

    match session.current() {
        Some(word) => {
            let card_area = centered_rect(area, CARD_WIDTH, CARD_HEIGHT);
            render_card(frame, card_area, word, session.is_flipped());
        }
        None => {
            let placeholder = centered_rect(area, CARD_WIDTH, 3);
            let lines = vec![
                Line::from(Span::styled(EMPTY_DECK_TEXT, Style::default().fg(COLOR_MUTED))),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Esc to go back",
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                )),
            ];
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), placeholder);
        }
    }
}

/// Render a single flashcard, front or back.
fn render_card(frame: &mut Frame, area: Rect, word: &WordEntry, flipped: bool) {
    let border_color = if flipped { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", word.category),
            Style::default().fg(COLOR_MUTED),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let content = inner_rect(block.inner(area), 1);
    frame.render_widget(block, area);

    let lines = if flipped {
        card_back_lines(word, content.width as usize)
    } else {
        card_front_lines(word)
    };

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        content,
    );
}

fn card_front_lines(word: &WordEntry) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            word.arabic.clone(),
            Style::default().fg(COLOR_ARABIC).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("Tap Space to reveal", Style::default().fg(COLOR_DIM))),
    ]
}

fn card_back_lines(word: &WordEntry, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            word.arabic.clone(),
            Style::default().fg(COLOR_ARABIC).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            word.transliteration.clone(),
            Style::default()
                .fg(COLOR_TRANSLITERATION)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            word.english.clone(),
            Style::default().fg(COLOR_GLOSS).add_modifier(Modifier::BOLD),
        )),
    ];

    if let Some(root) = &word.root_word {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Root: ", Style::default().fg(COLOR_DIM)),
            Span::styled(root.clone(), Style::default().fg(COLOR_ARABIC)),
        ]));
    }

    if let Some(ayah) = &word.example_ayah {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            truncate_to_width(ayah, width),
            Style::default().fg(COLOR_EXAMPLE),
        )));
        if let Some(translation) = &word.example_translation {
            lines.push(Line::from(Span::styled(
                translation.clone(),
                Style::default().fg(COLOR_MUTED).add_modifier(Modifier::ITALIC),
            )));
        }
    }

    if word.is_verb() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "d: verb details",
            Style::default().fg(COLOR_ACCENT),
        )));
    }

    lines
}

fn render_controls(frame: &mut Frame, area: Rect, session: &Session) {
    let enabled = |on: bool| {
        if on {
            Style::default().fg(COLOR_HEADER)
        } else {
            Style::default().fg(COLOR_DISABLED)
        }
    };

    let flip_label = if session.is_flipped() { "Show Front" } else { "Flip Card" };

    let line = Line::from(vec![
        Span::styled("◀ Prev (h)", enabled(session.can_go_back())),
        Span::raw("     "),
        Span::styled(
            format!("[ Space: {} ]", flip_label),
            enabled(!session.is_empty()).add_modifier(Modifier::BOLD),
        ),
        Span::raw("     "),
        Span::styled("Next (l) ▶", enabled(session.can_advance())),
    ]);

    let hints = Line::from(Span::styled(
        "d details   Esc back   q quit",
        Style::default().fg(COLOR_DIM),
    ));

    frame.render_widget(
        Paragraph::new(vec![line, hints]).alignment(Alignment::Center),
        inner_rect(area, 0),
    );
}
