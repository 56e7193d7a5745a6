use std::future::Future;

use super::snake::{GameEvent, SessionSummary};

/// Receiver of everything a running session reports to the outside world.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_events(&self, events: Vec<GameEvent>) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, summary: SessionSummary) -> impl Future<Output = ()> + Send;
}
