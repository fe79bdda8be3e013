//! Word detail overlay
//!
//! Centered dialog listing every field of the selected entry.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::vocabulary::WordEntry;

use super::helpers::{centered_rect, inner_rect};
use super::theme::{
    COLOR_ACCENT, COLOR_ARABIC, COLOR_BORDER, COLOR_DIM, COLOR_EXAMPLE, COLOR_GLOSS,
    COLOR_HEADER, COLOR_MUTED, COLOR_TRANSLITERATION,
};

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 18;

/// Render the detail overlay when an entry is selected
pub fn render_detail(frame: &mut Frame, app: &App) {
    let Some(word) = app.session.detail() else {
        return;
    };

    let dialog_area = centered_rect(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, dialog_area);

    let title = if word.is_verb() { " Verb Details " } else { " Word Details " };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT));

    let content = inner_rect(block.inner(dialog_area), 1);
    frame.render_widget(block, dialog_area);

    frame.render_widget(
        Paragraph::new(detail_lines(word)).wrap(Wrap { trim: true }),
        content,
    );
}

fn field<'a>(label: &'a str, value: String, value_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(COLOR_DIM)),
        Span::styled(value, value_style),
    ])
}

fn detail_lines(word: &WordEntry) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(
            word.arabic.as_str(),
            Style::default().fg(COLOR_ARABIC).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        field(
            "Translit.",
            word.transliteration.clone(),
            Style::default().fg(COLOR_TRANSLITERATION),
        ),
        field("Meaning", word.english.clone(), Style::default().fg(COLOR_GLOSS)),
        field("Category", word.category.to_string(), Style::default().fg(COLOR_MUTED)),
    ];

    if let Some(root) = &word.root_word {
        lines.push(field("Root", root.clone(), Style::default().fg(COLOR_ARABIC)));
    }

    let rank = match word.frequency_rank {
        Some(rank) if rank > 0 => format!("#{}", rank),
        _ => "unranked".to_string(),
    };
    lines.push(field("Frequency", rank, Style::default().fg(COLOR_MUTED)));

    if let Some(ayah) = &word.example_ayah {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            ayah.as_str(),
            Style::default().fg(COLOR_EXAMPLE),
        )));
        if let Some(translation) = &word.example_translation {
            lines.push(Line::from(Span::styled(
                translation.as_str(),
                Style::default().fg(COLOR_MUTED).add_modifier(Modifier::ITALIC),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc to close",
        Style::default().fg(COLOR_BORDER),
    )));
    lines
}
