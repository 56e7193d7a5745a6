use tokio::sync::mpsc;
use snake_common::games::SessionRng;
use snake_common::games::snake::{SessionCommand, SessionSetup, SnakeSession};
use snake_common::log;
use crate::state::{ClientCommand, SharedState};

use super::LocalBroadcaster;

/// Runs one session to completion. Returns the setup of a new game requested while this one was running.
pub async fn run_snake_game(
    shared_state: &SharedState,
    command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>,
    setup: SessionSetup,
    seed: Option<u64>,
) -> Option<SessionSetup> {
    let settings = match setup.validate() {
        Ok(settings) => settings,
        Err(e) => {
            log!("Cannot start a new game: {}", e);
            shared_state.set_prompt(e.prompt_text());
            return None;
        }
    };

    shared_state.resize_canvas(setup.canvas_width, setup.canvas_height);

    let rng = match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let broadcaster = LocalBroadcaster::new(shared_state.clone(), settings.cell_size);
    let (session_tx, session_rx) = mpsc::unbounded_channel();

    let mut game_handle = tokio::spawn(SnakeSession::run(settings, rng, session_rx, broadcaster));

    loop {
        tokio::select! {
            result = &mut game_handle => {
                if let Err(e) = result {
                    log!("Snake session task failed: {}", e);
                }
                return None;
            }
            command = command_rx.recv() => {
                match command {
                    Some(ClientCommand::Input(input)) => {
                        let _ = session_tx.send(SessionCommand::Input(input));
                    }
                    Some(ClientCommand::NewGame(next_setup)) => {
                        let _ = session_tx.send(SessionCommand::Stop);
                        let _ = (&mut game_handle).await;
                        return Some(next_setup);
                    }
                    None => {
                        let _ = session_tx.send(SessionCommand::Stop);
                        let _ = (&mut game_handle).await;
                        return None;
                    }
                }
            }
        }
    }
}
