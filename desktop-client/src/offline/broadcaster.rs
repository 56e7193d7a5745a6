use snake_common::games::GameBroadcaster;
use snake_common::games::snake::{GameEvent, SessionSummary};
use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
    cell_size: u32,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState, cell_size: u32) -> Self {
        Self { shared_state, cell_size }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_events(&self, events: Vec<GameEvent>) {
        self.shared_state.apply_events(&events, self.cell_size);
    }

    async fn broadcast_game_over(&self, summary: SessionSummary) {
        self.shared_state.set_summary(summary);
    }
}
