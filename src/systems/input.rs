use std::collections::HashMap;

use bevy_ecs::{
    event::EventWriter,
    resource::Resource,
    system::{NonSendMut, Res},
};
use sdl2::{event::Event, keyboard::Keycode, EventPump};
use tracing::info;

use crate::events::{GameCommand, GameEvent};

/// Maps physical keys to game commands.
#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        key_bindings.insert(Keycode::S, GameCommand::StartGame);
        key_bindings.insert(Keycode::Space, GameCommand::Flap);
        key_bindings.insert(Keycode::Up, GameCommand::Flap);

        key_bindings.insert(Keycode::P, GameCommand::TogglePause);
        key_bindings.insert(Keycode::D, GameCommand::ToggleDebug);
        key_bindings.insert(Keycode::Escape, GameCommand::Exit);
        key_bindings.insert(Keycode::Q, GameCommand::Exit);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn command_for(&self, key: Keycode) -> Option<GameCommand> {
        self.key_bindings.get(&key).copied()
    }
}

/// A keyboard event reduced to what command dispatch needs.
///
/// Keeps the dispatch logic testable without an SDL event pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleKeyEvent {
    KeyDown(Keycode),
    KeyUp(Keycode),
}

/// Translates a frame's worth of key events into game events.
///
/// Commands are edge-triggered: only the initial key-down emits, key
/// releases and unbound keys are ignored.
pub fn process_simple_key_events(bindings: &Bindings, events: &[SimpleKeyEvent]) -> Vec<GameEvent> {
    let mut out = Vec::new();

    for event in events {
        if let SimpleKeyEvent::KeyDown(key) = event {
            if let Some(command) = bindings.command_for(*key) {
                out.push(GameEvent::Command(command));
            }
        }
    }

    out
}

/// Polls the SDL event pump and forwards bound commands as game events.
pub fn input_system(bindings: Res<Bindings>, mut writer: EventWriter<GameEvent>, mut pump: NonSendMut<EventPump>) {
    let mut key_events = Vec::new();

    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                info!("Window close requested");
                writer.write(GameEvent::Command(GameCommand::Exit));
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                key_events.push(SimpleKeyEvent::KeyDown(key));
            }
            Event::KeyUp {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                key_events.push(SimpleKeyEvent::KeyUp(key));
            }
            _ => {}
        }
    }

    writer.write_batch(process_simple_key_events(&bindings, &key_events));
}
