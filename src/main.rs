use qflash::app::{App, AppMessage};
use qflash::cli::{parse_args, run_cli_command, CliCommand, RunOptions};
use qflash::config::StudyConfig;
use qflash::logging::init_logging;
use qflash::terminal::{setup_panic_hook, TerminalManager};
use qflash::ui;
use qflash::vocabulary::VocabularyStore;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // Handle CLI flags before any initialization
    let options = match parse_args(std::env::args()) {
        Ok(CliCommand::RunTui(options)) => options,
        Ok(command) => {
            if run_cli_command(&command) {
                return Ok(());
            }
            RunOptions::default()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'qflash --help' for usage.");
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    let config = options.apply(StudyConfig::from_env());
    init_logging(config.log_file.as_deref())?;

    // Load before touching the terminal so errors print to a normal shell
    let store = VocabularyStore::load_or_embedded(config.vocabulary_path.as_deref())?;
    tracing::info!(
        "Loaded {} vocabulary entries (limit {})",
        store.len(),
        config.default_limit
    );

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut term_manager = TerminalManager::new()?;
        let mut app = App::new(config, store);

        if let Ok(size) = term_manager.size() {
            app.update_terminal_dimensions(size.width, size.height);
        }

        let result = run_app(term_manager.terminal(), &mut app).await;

        // Restore terminal before any error is reported
        term_manager.restore();
        tracing::info!("qflash exiting");
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        // 16ms tick keeps the loading spinner moving
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    // Input stream closed
                    None => app.quit(),
                }
            }

            Some(msg) = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
