use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::fact_source::FactSource;
use crate::preference::PreferenceStore;
use crate::ui::engagement::EngagementTracker;
use crate::ui::events::{self, EventReceiver, SessionEvent};
use crate::ui::fact::FactFetchCoordinator;
use crate::ui::gallery::{GalleryError, GallerySelector};
use crate::ui::name::{NameComposer, NameError, RandomSource, ThreadRngSource, WordPools};
use crate::ui::scroll::{ScrollAnimationDriver, ScrollCurve};
use crate::ui::theme::ThemePreference;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid gallery: {0}")]
    Gallery(#[from] GalleryError),

    #[error("Invalid name pools: {0}")]
    Names(#[from] NameError),
}

/// External collaborators a session talks to.
#[derive(Clone)]
pub struct SessionDeps {
    pub fact_source: Arc<dyn FactSource>,
    pub preferences: Arc<dyn PreferenceStore>,
}

pub type SessionRng = Box<dyn RandomSource + Send>;

/// All component instances for one visitor session.
///
/// The owner drives it from a single task: intent methods are called on
/// the components directly, and [`next_event`](Self::next_event) /
/// [`handle_event`](Self::handle_event) apply timer firings and fetch
/// completions in between. Dropping the session cancels every timer and
/// the in-flight fetch.
pub struct Session {
    engagement: EngagementTracker,
    facts: FactFetchCoordinator,
    gallery: GallerySelector,
    theme: ThemePreference,
    scroll: ScrollAnimationDriver,
    names: NameComposer<SessionRng>,
    events: EventReceiver,
}

impl Session {
    /// Build a session and kick off its startup work: the theme is read
    /// from the store, the first fact is requested, and the gallery ticker
    /// starts if configured.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: &Config, deps: SessionDeps) -> Result<Self, SessionError> {
        Self::with_rng(config, deps, Box::new(ThreadRngSource))
    }

    pub fn with_rng(
        config: &Config,
        deps: SessionDeps,
        rng: SessionRng,
    ) -> Result<Self, SessionError> {
        let (tx, rx) = events::channel();

        let names = NameComposer::with_rng(WordPools::from_config(&config.names)?, rng);
        let gallery = GallerySelector::new(
            config.gallery.images.clone(),
            config.gallery.auto_advance,
            config.timing.gallery_interval(),
            tx.clone(),
        )?;
        let engagement = EngagementTracker::new(config.timing.like_ack_window(), tx.clone());
        let scroll = ScrollAnimationDriver::new(ScrollCurve::from(&config.scroll));

        let mut theme = ThemePreference::new(deps.preferences);
        theme.initialize();

        let facts = FactFetchCoordinator::new(deps.fact_source, tx);

        info!(
            images = gallery.state().len(),
            auto_advance = gallery.state().auto_advance_enabled,
            theme = theme.mode().as_str(),
            "session started"
        );

        Ok(Self {
            engagement,
            facts,
            gallery,
            theme,
            scroll,
            names,
            events: rx,
        })
    }

    pub fn engagement(&self) -> &EngagementTracker {
        &self.engagement
    }

    pub fn engagement_mut(&mut self) -> &mut EngagementTracker {
        &mut self.engagement
    }

    pub fn facts(&self) -> &FactFetchCoordinator {
        &self.facts
    }

    pub fn facts_mut(&mut self) -> &mut FactFetchCoordinator {
        &mut self.facts
    }

    pub fn gallery(&self) -> &GallerySelector {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut GallerySelector {
        &mut self.gallery
    }

    pub fn theme(&self) -> &ThemePreference {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemePreference {
        &mut self.theme
    }

    pub fn scroll(&self) -> &ScrollAnimationDriver {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollAnimationDriver {
        &mut self.scroll
    }

    pub fn names(&self) -> &NameComposer<SessionRng> {
        &self.names
    }

    pub fn names_mut(&mut self) -> &mut NameComposer<SessionRng> {
        &mut self.names
    }

    /// Wait for the next timer firing or fetch completion.
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        self.events.recv().await
    }

    /// Take an already-delivered event without waiting.
    pub fn try_next_event(&mut self) -> Option<SessionEvent> {
        self.events.try_recv().ok()
    }

    /// Route an event to its component. Returns whether state changed.
    pub fn handle_event(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::LikeExpired { generation } => self.engagement.on_expired(generation),
            SessionEvent::GalleryTick { generation } => self.gallery.on_tick(generation),
            SessionEvent::FactResolved { epoch, result } => self.facts.on_resolved(epoch, result),
        }
    }

    /// Apply every event already waiting in the queue.
    pub fn drain_events(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.try_next_event() {
            if self.handle_event(event) {
                applied += 1;
            }
        }
        applied
    }

    /// Cancel all timers and the in-flight fetch.
    pub fn shutdown(&mut self) {
        self.engagement.shutdown();
        self.gallery.shutdown();
        self.facts.shutdown();
        self.events.close();
        info!("session shut down");
    }
}
