use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::generation::{GeminiClient, ImageGenerator};
use crate::share::ShareSheet;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::run_worker;

const TICK_RATE: Duration = Duration::from_millis(100);
const COMMAND_QUEUE: usize = 16;

/// Run the terminal UI until the user quits.
pub fn run(config: &Config, initial_prompt: Option<&str>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("colorpage-worker")
        .build()
        .context("failed to start async runtime")?;

    let generator: Arc<dyn ImageGenerator> = {
        let _enter = runtime.enter();
        Arc::new(GeminiClient::from_config(&config.generation)?)
    };
    let sheet = ShareSheet::from_config(&config.share);
    tracing::info!(
        generator = generator.name(),
        share_targets = sheet.len(),
        "starting ui"
    );

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(TICK_RATE);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(run_worker(
        generator,
        sheet.clone(),
        command_rx,
        events.sender(),
    ));

    let mut app = App::new(sheet);
    app.set_command_sender(command_tx);
    if let Some(prompt) = initial_prompt {
        app.set_prompt(prompt);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => terminal.autoresize()?,
            Ok(AppEvent::GenerationFinished(result)) => app.on_generation_finished(result),
            Ok(AppEvent::ShareFinished(result)) => app.on_share_finished(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app closes the command channel and stops the worker.
    drop(app);
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("ui stopped");
    Ok(())
}
