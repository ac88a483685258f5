use tokio::sync::broadcast;

/// What changed under a game. The payload is deliberately just a hint: the
/// client's reaction to any notification is "refetch and replace snapshot",
/// so delivery only has to be best-effort and at-least-once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Game,
    Players,
}

/// Subscription handle for one game's change notifications.
pub struct ChangeFeed {
    receiver: broadcast::Receiver<StateChange>,
}

impl ChangeFeed {
    pub(crate) fn new(receiver: broadcast::Receiver<StateChange>) -> Self {
        Self { receiver }
    }

    /// Next notification, or `None` once the publisher is gone. A lagged
    /// receiver collapses the missed backlog into a single `Game` hint,
    /// which is safe because consumers refetch everything anyway.
    pub async fn next(&mut self) -> Option<StateChange> {
        match self.receiver.recv().await {
            Ok(change) => Some(change),
            Err(broadcast::error::RecvError::Lagged(_)) => Some(StateChange::Game),
            Err(broadcast::error::RecvError::Closed) => None,
        }
    }
}
