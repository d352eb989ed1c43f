use bevy_ecs::{
    event::{EventReader, EventWriter},
    query::With,
    system::{Query, ResMut},
};
use tracing::{error, info};

use crate::constants::physics::FLAP_VELOCITY;
use crate::error::GameError;
use crate::events::{GameCommand, GameEvent};
use crate::systems::components::{DebugState, GlobalState, PauseState, PlayerControlled, RunState, Velocity};

/// Applies the frame's commands to the simulation state.
///
/// The flap impulse replaces the bird's velocity outright rather than adding
/// to it, and is ignored until the game has been started.
pub fn control_system(
    mut events: EventReader<GameEvent>,
    mut state: ResMut<GlobalState>,
    mut run_state: ResMut<RunState>,
    mut pause: ResMut<PauseState>,
    mut debug: ResMut<DebugState>,
    mut players: Query<&mut Velocity, With<PlayerControlled>>,
    mut errors: EventWriter<GameError>,
) {
    for event in events.read() {
        let GameEvent::Command(command) = event;
        match command {
            GameCommand::StartGame => {
                if !run_state.running() {
                    info!("Game started");
                    *run_state = RunState::Running;
                }
            }
            GameCommand::Flap => {
                if !run_state.running() || pause.active() {
                    continue;
                }
                match players.single_mut() {
                    Ok(mut velocity) => velocity.0 = FLAP_VELOCITY,
                    Err(e) => {
                        errors.write(GameError::InvalidState(format!("No single player entity for flap: {e}")));
                    }
                }
            }
            GameCommand::TogglePause => {
                *pause = pause.toggled();
                info!("{}", if pause.active() { "Paused" } else { "Unpaused" });
            }
            GameCommand::ToggleDebug => {
                debug.enabled = !debug.enabled;
            }
            GameCommand::Exit => {
                info!("Exit requested");
                state.exit = true;
            }
        }
    }
}

/// Drains reported errors into the log.
///
/// Runtime systems never abort the frame; failures funnel here instead.
pub fn error_log_system(mut errors: EventReader<GameError>) {
    for e in errors.read() {
        error!("{e}");
    }
}
