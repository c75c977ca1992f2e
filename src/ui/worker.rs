//! Background worker: runs generation requests and share targets off the UI thread.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::generation::ImageGenerator;
use crate::share::{ShareError, ShareSheet};
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Process commands until the UI drops its sender.
///
/// Each command runs in its own task; results are posted back to the UI
/// event channel.
pub async fn run_worker(
    generator: Arc<dyn ImageGenerator>,
    sheet: ShareSheet,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::Generate { prompt } => {
                let generator = Arc::clone(&generator);
                let events = events.clone();
                tokio::spawn(async move {
                    tracing::info!(generator = generator.name(), prompt = %prompt, "generating page");
                    let result = generator.generate(&prompt).await;
                    if let Err(err) = &result {
                        tracing::warn!(error = %err, "generation failed");
                    }
                    let _ = events.send(AppEvent::GenerationFinished(result));
                });
            }
            UiCommand::Share { index, request } => {
                let sheet = sheet.clone();
                let events = events.clone();
                tokio::spawn(async move {
                    let result = tokio::task::spawn_blocking(move || sheet.deliver(index, &request))
                        .await
                        .unwrap_or_else(|err| Err(ShareError::Failed(err.to_string())));
                    let _ = events.send(AppEvent::ShareFinished(result));
                });
            }
        }
    }
    tracing::debug!("ui command channel closed, worker stopping");
}
