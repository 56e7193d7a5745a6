use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};

use crate::games::{GameBroadcaster, SessionRng};
use crate::log;
use super::events::{SessionEvent, SessionSummary};
use super::game_state::SnakeGameState;
use super::settings::SnakeSessionSettings;
use super::types::{Input, SessionStatus};

const CLOCK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Input(Input),
    Stop,
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives one game until it ends, is stopped, or the command channel closes.
    pub async fn run<B: GameBroadcaster>(
        settings: SnakeSessionSettings,
        mut rng: SessionRng,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: B,
    ) -> SessionSummary {
        let mut state = SnakeGameState::new(settings);
        broadcaster.broadcast_events(state.initial_events()).await;
        log!(
            "Session created: {}x{} cells, seed {}",
            state.settings().bounds.half_width * 2,
            state.settings().bounds.half_height * 2,
            rng.seed()
        );

        let mut movement = interval(state.settings().tick_interval);
        movement.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut clock: Option<Interval> = None;

        loop {
            let event = tokio::select! {
                _ = movement.tick() => SessionEvent::MoveTick,
                _ = next_clock_tick(&mut clock) => SessionEvent::ClockTick,
                command = commands.recv() => match command {
                    Some(SessionCommand::Input(input)) => SessionEvent::Input(input),
                    Some(SessionCommand::Stop) | None => break,
                },
            };

            let events = state.apply(event, &mut rng);

            if state.is_clock_running() && clock.is_none() {
                let mut ticker = interval_at(Instant::now() + CLOCK_PERIOD, CLOCK_PERIOD);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                clock = Some(ticker);
            }

            if !events.is_empty() {
                broadcaster.broadcast_events(events).await;
            }

            if state.status() == SessionStatus::GameOver {
                break;
            }
        }

        let summary = state.summary();
        broadcaster.broadcast_game_over(summary.clone()).await;
        summary
    }
}

async fn next_clock_tick(clock: &mut Option<Interval>) {
    match clock {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
