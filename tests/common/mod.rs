//! Shared test utilities and doubles.

#![allow(dead_code, unused_imports)]

pub mod mock_fact_server;

use async_trait::async_trait;
use feline_showcase::config::Config;
use feline_showcase::fact_source::{FactError, FactSource};
use feline_showcase::preference::MemoryPreferenceStore;
use feline_showcase::ui::events::SessionEvent;
use feline_showcase::ui::name::ScriptedSource;
use feline_showcase::ui::{Session, SessionDeps};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub const SAMPLE_FACT: &str = "Cats sleep 70% of their lives.";

/// Fact source that replays queued results and counts calls.
pub struct ScriptedFactSource {
    results: Mutex<VecDeque<Result<String, FactError>>>,
    calls: AtomicUsize,
    delay: Duration,
}

impl ScriptedFactSource {
    pub fn new(results: impl IntoIterator<Item = Result<String, FactError>>) -> Self {
        Self {
            results: Mutex::new(results.into_iter().collect()),
            calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    pub fn facts(facts: &[&str]) -> Self {
        Self::new(facts.iter().map(|f| Ok(f.to_string())))
    }

    /// Each fetch waits this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn push(&self, result: Result<String, FactError>) {
        self.results.lock().push_back(result);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FactSource for ScriptedFactSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch(&self) -> Result<String, FactError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(SAMPLE_FACT.to_string()))
    }
}

/// Session wired to in-memory doubles.
pub fn make_session(
    config: &Config,
    source: Arc<ScriptedFactSource>,
    store: Arc<MemoryPreferenceStore>,
) -> Session {
    let deps = SessionDeps {
        fact_source: source,
        preferences: store,
    };
    Session::with_rng(config, deps, Box::new(ScriptedSource::new([0, 0, 0])))
        .expect("session should build")
}

/// Default config with the gallery ticker switched off.
pub fn quiet_config() -> Config {
    let mut config = Config::default();
    config.gallery.auto_advance = false;
    config
}

/// Write `content` to a fresh `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Wait for the next event and apply it, returning whether it changed state.
pub async fn step(session: &mut Session) -> bool {
    let event = session
        .next_event()
        .await
        .expect("session event channel closed");
    session.handle_event(event)
}

pub fn generation_of(event: &SessionEvent) -> u64 {
    match event {
        SessionEvent::LikeExpired { generation } | SessionEvent::GalleryTick { generation } => {
            *generation
        }
        SessionEvent::FactResolved { epoch, .. } => *epoch,
    }
}
