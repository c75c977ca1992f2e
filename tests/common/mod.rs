//! Shared test utilities: fake generator, fake share targets, mock service.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use colorpage::config::GenerationConfig;
use colorpage::generation::{Base64Image, GenerationError, ImageGenerator, NonEmptyPrompt};
use colorpage::packaging::SharedFile;
use colorpage::share::{
    ShareError, ShareReceipt, ShareRequest, ShareSheet, ShareSupport, ShareTarget,
};
use colorpage::ui::app::{App, UiCommand};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Smallest valid PNG (1x1, transparent).
pub const TINY_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

// -- Generator ----------------------------------------------------------------

/// Generator that replays queued outcomes and records every prompt.
#[derive(Default)]
pub struct FakeGenerator {
    outcomes: Mutex<VecDeque<Result<Base64Image, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn returning(outcome: Result<Base64Image, GenerationError>) -> Arc<Self> {
        let generator = Self::default();
        generator.outcomes.lock().push_back(outcome);
        Arc::new(generator)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl ImageGenerator for FakeGenerator {
    fn name(&self) -> &str {
        "fake"
    }

    async fn generate(&self, prompt: &NonEmptyPrompt) -> Result<Base64Image, GenerationError> {
        self.prompts.lock().push(prompt.as_str().to_string());
        self.outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::NoImage { detail: None }))
    }
}

// -- Share targets ------------------------------------------------------------

/// Share target with a fixed capability and a scripted outcome.
pub struct FakeTarget {
    pub support: ShareSupport,
    pub outcome: Result<ShareReceipt, ShareError>,
    pub received: Mutex<Vec<ShareRequest>>,
}

impl FakeTarget {
    pub fn new(support: ShareSupport, outcome: Result<ShareReceipt, ShareError>) -> Arc<Self> {
        Arc::new(Self {
            support,
            outcome,
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn accepting() -> Arc<Self> {
        Self::new(
            ShareSupport::Files,
            Ok(ShareReceipt {
                summary: "Shared".to_string(),
            }),
        )
    }

    pub fn received(&self) -> Vec<ShareRequest> {
        self.received.lock().clone()
    }
}

impl ShareTarget for FakeTarget {
    fn label(&self) -> &str {
        "Fake target"
    }

    fn support(&self) -> ShareSupport {
        self.support
    }

    fn share(&self, request: &ShareRequest) -> Result<ShareReceipt, ShareError> {
        self.received.lock().push(request.clone());
        self.outcome.clone()
    }
}

pub fn sheet_with(target: &Arc<FakeTarget>) -> ShareSheet {
    ShareSheet::new(vec![Arc::clone(target) as Arc<dyn ShareTarget>])
}

// -- App helpers --------------------------------------------------------------

/// App wired to a command receiver the test inspects.
pub fn make_app(sheet: ShareSheet) -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(8);
    let mut app = App::new(sheet);
    app.set_command_sender(tx);
    (app, rx)
}

/// Generation config pointing at `endpoint` with a fixed key.
pub fn generation_config(endpoint: &str) -> GenerationConfig {
    GenerationConfig {
        endpoint: endpoint.to_string(),
        api_key: Some("test-key".to_string()),
        ..GenerationConfig::default()
    }
}
