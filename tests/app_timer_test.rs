//! End-to-end delay handling: keys schedule real tokio timers whose messages
//! come back through the app channel.
//!
//! Time is paused, so `tokio::time::advance` fires timers deterministically.

mod common;

use std::time::Duration;

use common::{drain_messages, mixed_store, press, test_app};
use crossterm::event::KeyCode;
use qflash::app::Screen;
use qflash::session::{DelayKind, Phase};
use qflash::vocabulary::{CategorySelector, WordCategory};

const BUILD: Duration = Duration::from_millis(400);
const NAV: Duration = Duration::from_millis(200);

/// Let freshly spawned timer tasks register their deadlines, advance paused
/// time, then let the woken tasks send.
async fn advance(duration: Duration) {
    settle().await;
    tokio::time::advance(duration).await;
    settle().await;
}

async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_deck_appears_after_build_delay() {
    let mut app = test_app(mixed_store());
    let mut rx = app.message_rx.take().unwrap();

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), Screen::Study);
    assert_eq!(app.session.phase(), Phase::Loading);

    advance(BUILD / 2).await;
    assert_eq!(drain_messages(&mut app, &mut rx), 0);
    assert!(app.session.is_loading());

    advance(BUILD).await;
    assert_eq!(drain_messages(&mut app, &mut rx), 1);
    assert_eq!(app.session.phase(), Phase::Ready);
    // Mixed review: 6 nouns, 4 verbs and 2 particles
    assert_eq!(app.session.len(), 12);
}

#[tokio::test(start_paused = true)]
async fn test_stale_build_never_applies() {
    let mut app = test_app(mixed_store());
    let mut rx = app.message_rx.take().unwrap();

    app.select_category(CategorySelector::Only(WordCategory::Noun));
    advance(BUILD / 2).await;
    app.select_category(CategorySelector::Only(WordCategory::Particle));

    // The first timer would have fired here had it not been replaced
    advance(BUILD / 2 + Duration::from_millis(1)).await;
    assert_eq!(drain_messages(&mut app, &mut rx), 0);
    assert!(app.session.is_loading());

    advance(BUILD).await;
    drain_messages(&mut app, &mut rx);
    assert_eq!(app.session.phase(), Phase::Ready);
    assert_eq!(
        app.session.selector(),
        Some(CategorySelector::Only(WordCategory::Particle))
    );
    assert_eq!(app.session.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_queued_stale_message_is_ignored() {
    let mut app = test_app(mixed_store());
    let mut rx = app.message_rx.take().unwrap();

    app.select_category(CategorySelector::Only(WordCategory::Noun));
    advance(BUILD).await;
    // Message sits in the channel while a new selection is made
    app.select_category(CategorySelector::Only(WordCategory::Verb));
    drain_messages(&mut app, &mut rx);
    assert!(app.session.is_loading());

    advance(BUILD).await;
    drain_messages(&mut app, &mut rx);
    assert!(app.session.current().unwrap().is_verb());
}

#[tokio::test(start_paused = true)]
async fn test_next_moves_after_navigation_delay() {
    let mut app = test_app(mixed_store());
    let mut rx = app.message_rx.take().unwrap();

    app.select_category(CategorySelector::Only(WordCategory::Verb));
    advance(BUILD).await;
    drain_messages(&mut app, &mut rx);

    press(&mut app, KeyCode::Char(' '));
    assert!(app.session.is_flipped());

    press(&mut app, KeyCode::Right);
    assert!(!app.session.is_flipped());
    assert_eq!(app.session.index(), 0);

    advance(NAV).await;
    drain_messages(&mut app, &mut rx);
    assert_eq!(app.session.index(), 1);
    assert!(!app.scheduler.is_pending(DelayKind::Navigate));
}

#[tokio::test(start_paused = true)]
async fn test_rapid_next_presses_move_once() {
    let mut app = test_app(mixed_store());
    let mut rx = app.message_rx.take().unwrap();

    app.select_category(CategorySelector::Only(WordCategory::Noun));
    advance(BUILD).await;
    drain_messages(&mut app, &mut rx);

    press(&mut app, KeyCode::Right);
    advance(NAV / 2).await;
    press(&mut app, KeyCode::Right);
    advance(NAV).await;

    assert_eq!(drain_messages(&mut app, &mut rx), 1);
    assert_eq!(app.session.index(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_back_cancels_pending_timers() {
    let mut app = test_app(mixed_store());
    let mut rx = app.message_rx.take().unwrap();

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen(), Screen::Home);

    advance(BUILD * 2).await;
    assert_eq!(drain_messages(&mut app, &mut rx), 0);
    assert_eq!(app.session.phase(), Phase::Idle);
}
