//! qflash - A terminal flashcard trainer for Quranic Arabic vocabulary
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod deck;
pub mod logging;
pub mod session;
pub mod terminal;
pub mod timer;
pub mod ui;
pub mod vocabulary;
