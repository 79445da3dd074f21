use tokio::sync::mpsc;

use crate::fact_source::FactError;

/// Asynchronous completions routed back into the session.
///
/// Timer tasks and the fact fetch never touch component state directly;
/// they post one of these and the session's owner applies it on its own
/// turn. Every variant is tagged with the generation that armed it so a
/// completion from a superseded timer or request can be recognized and
/// dropped.
#[derive(Debug)]
pub enum SessionEvent {
    /// The like acknowledgment window armed with `generation` elapsed.
    LikeExpired { generation: u64 },
    /// Auto-advance period of the gallery ticker armed with `generation`.
    GalleryTick { generation: u64 },
    /// The fact request started at `epoch` finished.
    FactResolved {
        epoch: u64,
        result: Result<String, FactError>,
    },
}

pub type EventSender = mpsc::UnboundedSender<SessionEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<SessionEvent>;

/// Channel connecting component tasks to the session owner.
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
