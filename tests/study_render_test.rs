//! Render tests driving the app with keys and drawing into a TestBackend.

mod common;

use common::{press, test_app};
use crossterm::event::KeyCode;
use qflash::app::{App, AppMessage};
use qflash::session::DelayKind;
use qflash::ui::{render, EMPTY_DECK_TEXT, LOADING_TEXT};
use qflash::vocabulary::VocabularyStore;
use ratatui::{backend::TestBackend, Terminal};

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 36)).unwrap();
    terminal.draw(|f| render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn complete_build(app: &mut App) {
    let ticket = app.session.pending(DelayKind::Build).expect("build pending");
    app.handle_message(AppMessage::DelayElapsed(ticket));
}

#[tokio::test]
async fn test_home_limit_selector_updates() {
    let mut app = test_app(VocabularyStore::embedded().unwrap());

    press(&mut app, KeyCode::Left);
    let text = draw(&app);
    assert!(text.contains("[30]"));
    assert!(text.contains("~90 words total"));
    assert!(text.contains("Top 30 verbs"));
}

#[tokio::test]
async fn test_loading_then_card() {
    let mut app = test_app(VocabularyStore::embedded().unwrap());

    // Verbs
    press(&mut app, KeyCode::Char('3'));
    assert!(draw(&app).contains(LOADING_TEXT));

    complete_build(&mut app);
    let front = draw(&app);
    assert!(!front.contains(LOADING_TEXT));
    assert!(front.contains("VERB"));
    assert!(front.contains(&format!("1 / {}", app.session.len())));

    let word = app.session.current().cloned().unwrap();
    assert!(!front.contains(&word.english));

    press(&mut app, KeyCode::Char(' '));
    let back = draw(&app);
    assert!(back.contains(&word.transliteration));
}

#[tokio::test]
async fn test_detail_overlay_opens_and_closes() {
    let mut app = test_app(VocabularyStore::embedded().unwrap());
    press(&mut app, KeyCode::Char('2'));
    complete_build(&mut app);

    press(&mut app, KeyCode::Char('d'));
    assert!(draw(&app).contains("Word Details"));

    press(&mut app, KeyCode::Esc);
    let text = draw(&app);
    assert!(!text.contains("Word Details"));
    // Esc in the overlay closes it without leaving the session
    assert!(text.contains("NOUN"));
}

#[tokio::test]
async fn test_empty_category_shows_message() {
    let store = VocabularyStore::new(common::ranked_words(
        "n",
        qflash::vocabulary::WordCategory::Noun,
        2,
    ))
    .unwrap();
    let mut app = test_app(store);

    // Particles
    press(&mut app, KeyCode::Char('4'));
    complete_build(&mut app);

    let text = draw(&app);
    assert!(text.contains(EMPTY_DECK_TEXT));
    assert!(text.contains("0 / 0"));
}

#[tokio::test]
async fn test_back_returns_to_home() {
    let mut app = test_app(VocabularyStore::embedded().unwrap());
    press(&mut app, KeyCode::Enter);
    complete_build(&mut app);

    press(&mut app, KeyCode::Esc);
    assert!(draw(&app).contains("Mixed Review"));
}
