use tokio::sync::mpsc;
use crate::state::{ClientCommand, SharedState};

use super::snake_runner::run_snake_game;

pub async fn local_game_task(
    shared_state: SharedState,
    seed: Option<u64>,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    loop {
        let Some(command) = command_rx.recv().await else {
            break;
        };

        match command {
            ClientCommand::NewGame(setup) => {
                let mut next_setup = Some(setup);
                while let Some(setup) = next_setup.take() {
                    next_setup = run_snake_game(&shared_state, &mut command_rx, setup, seed).await;
                }
            }
            ClientCommand::Input(_) => {}
        }
    }
}
