use flappy::events::{GameCommand, GameEvent};

#[test]
fn test_command_converts_into_event() {
    let event: GameEvent = GameCommand::Flap.into();
    assert_eq!(event, GameEvent::Command(GameCommand::Flap));
}

#[test]
fn test_commands_are_comparable() {
    assert_eq!(GameCommand::StartGame, GameCommand::StartGame);
    assert_ne!(GameCommand::StartGame, GameCommand::Flap);
}
