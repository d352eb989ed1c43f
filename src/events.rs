use bevy_ecs::event::Event;

/// A user intent, decoupled from the physical key that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameCommand {
    /// Begin the simulation. One-way; ignored once running.
    StartGame,
    /// Give the bird its upward impulse.
    Flap,
    TogglePause,
    ToggleDebug,
    Exit,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}
