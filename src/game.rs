//! This module contains the main game logic and state.

include!(concat!(env!("OUT_DIR"), "/atlas_data.rs"));

use tracing::{debug, info, trace};

use crate::constants::{bird, layer, scroll, CANVAS_SIZE, SPRITE_SCALE};
use crate::error::{GameError, GameResult};
use crate::events::{GameCommand, GameEvent};
use crate::systems::{
    animation_system, control_system, debug_render_system, error_log_system, hud_render_system, input_system, physics_system,
    present_system, render_system, scroll_system, tilt_system, Animated, BackbufferResource, Bindings, BirdBundle, Collider,
    DebugState, DeltaTime, GlobalState, LayerBundle, PauseState, PlayerControlled, Position, Renderable, RunState, Scrolling,
    Tilt, Velocity,
};

use bevy_ecs::event::EventRegistry;
use bevy_ecs::observer::Trigger;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::{Res, ResMut};
use bevy_ecs::world::World;
use sdl2::event::EventType;
use sdl2::image::LoadTexture;
use sdl2::render::{Canvas, ScaleMode, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

use crate::{
    asset::Asset,
    texture::animated::AnimatedTexture,
    texture::sprite::{AtlasMapper, AtlasTile, SpriteAtlas},
};

/// Sprite names every startup requires from the atlas.
///
/// The pipe is not spawned yet, but its tile is validated with the rest so a
/// broken atlas fails at startup rather than when obstacles land.
const BACKGROUND_SPRITE: &str = "background.png";
const GROUND_SPRITE: &str = "base.png";
const PIPE_SPRITE: &str = "pipe.png";
const BIRD_SPRITES: [&str; 3] = ["bird/upflap.png", "bird/midflap.png", "bird/downflap.png"];

/// System set for all gameplay systems to ensure they run after input processing
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum GameplaySet {
    /// Gameplay systems that process inputs
    Input,
    /// Gameplay systems that update the game state
    Update,
}

/// System set for all rendering systems to ensure they run after gameplay logic
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum RenderSet {
    Animation,
    Draw,
    Present,
}

/// Core game state manager built on the Bevy ECS architecture.
///
/// Orchestrates all game systems through a centralized `World` containing entities,
/// components, and resources, while a `Schedule` defines system execution order.
/// Handles initialization of graphics resources, entity spawning, and per-frame
/// game logic coordination. SDL2 resources are stored as `NonSend` to respect
/// thread safety requirements while integrating with the ECS.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Initializes the complete game state including ECS world, graphics, and entity spawning.
    ///
    /// Creates the backbuffer render target, loads and validates the sprite
    /// atlas, spawns the bird with its flap animation, and spawns the two
    /// scrolling layers. Registers event types and configures the system
    /// execution schedule.
    ///
    /// # Arguments
    ///
    /// * `canvas` - SDL2 rendering context, moved into the ECS as a `NonSend` resource
    /// * `texture_creator` - SDL2 texture factory for creating render targets
    /// * `event_pump` - SDL2 event polling interface for input handling
    ///
    /// # Errors
    ///
    /// Returns `GameError` for SDL2 failures, asset loading problems, or
    /// missing atlas tiles.
    pub fn new(
        canvas: Canvas<Window>,
        texture_creator: TextureCreator<WindowContext>,
        mut event_pump: EventPump,
    ) -> GameResult<Game> {
        info!("Starting game initialization");

        debug!("Disabling unnecessary SDL events");
        Self::disable_sdl_events(&mut event_pump);

        trace!("Creating backbuffer texture");
        let mut backbuffer = texture_creator
            .create_texture_target(None, CANVAS_SIZE.x, CANVAS_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        backbuffer.set_scale_mode(ScaleMode::Nearest);

        debug!("Loading sprite atlas");
        let atlas = Self::load_atlas(&texture_creator)?;

        let mut world = World::default();
        let mut schedule = Schedule::default();

        debug!("Setting up ECS events and observers");
        Self::setup_ecs(&mut world);

        debug!("Spawning entities");
        Self::spawn_bird(&mut world, &atlas)?;
        Self::spawn_layers(&mut world, &atlas)?;

        debug!("Inserting resources into ECS world");
        Self::insert_resources(&mut world, atlas, event_pump, canvas, backbuffer);

        debug!("Configuring system execution schedule");
        Self::configure_schedule(&mut schedule);

        info!("Game initialization completed successfully");
        Ok(Game { world, schedule })
    }

    fn disable_sdl_events(event_pump: &mut EventPump) {
        for event_type in [
            EventType::JoyAxisMotion,
            EventType::JoyBallMotion,
            EventType::JoyHatMotion,
            EventType::JoyButtonDown,
            EventType::JoyButtonUp,
            EventType::JoyDeviceAdded,
            EventType::JoyDeviceRemoved,
            EventType::ControllerAxisMotion,
            EventType::ControllerButtonDown,
            EventType::ControllerButtonUp,
            EventType::ControllerDeviceAdded,
            EventType::ControllerDeviceRemoved,
            EventType::ControllerDeviceRemapped,
            EventType::FingerDown,
            EventType::FingerUp,
            EventType::FingerMotion,
            EventType::MouseMotion,
            EventType::MouseWheel,
        ] {
            event_pump.disable_event(event_type);
        }
    }

    fn load_atlas(texture_creator: &TextureCreator<WindowContext>) -> GameResult<SpriteAtlas> {
        trace!("Loading atlas image from embedded assets");
        let atlas_bytes = Asset::AtlasImage.get_bytes()?;
        let atlas_texture = texture_creator.load_texture_bytes(&atlas_bytes).map_err(|e| {
            if e.to_string().contains("format") || e.to_string().contains("unsupported") {
                GameError::Texture(crate::error::TextureError::InvalidFormat(format!(
                    "Unsupported texture format: {e}"
                )))
            } else {
                GameError::Texture(crate::error::TextureError::LoadFailed(e.to_string()))
            }
        })?;

        debug!(frame_count = ATLAS_FRAMES.len(), "Creating sprite atlas from texture");
        let atlas_mapper = AtlasMapper {
            frames: ATLAS_FRAMES.into_iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        };
        let atlas = SpriteAtlas::new(atlas_texture, atlas_mapper);

        for name in [BACKGROUND_SPRITE, GROUND_SPRITE, PIPE_SPRITE].into_iter().chain(BIRD_SPRITES) {
            let tile = atlas.get_tile(name)?;
            info!(sprite = name, width = tile.size.x, height = tile.size.y, "Validated sprite");
        }

        Ok(atlas)
    }

    fn setup_ecs(world: &mut World) {
        EventRegistry::register_event::<GameError>(world);
        EventRegistry::register_event::<GameEvent>(world);

        world.add_observer(|event: Trigger<GameEvent>, mut state: ResMut<GlobalState>| {
            if matches!(*event, GameEvent::Command(GameCommand::Exit)) {
                state.exit = true;
            }
        });
    }

    fn spawn_bird(world: &mut World, atlas: &SpriteAtlas) -> GameResult<()> {
        trace!("Loading bird flap frames from atlas");
        let frames = BIRD_SPRITES
            .iter()
            .map(|name| atlas.get_tile(name))
            .collect::<Result<Vec<AtlasTile>, _>>()?;

        // Collision circle follows the frame width, scaled like the drawn sprite.
        let radius = frames[0].size.x as f32 * SPRITE_SCALE / 2.0;
        let start_sprite = frames[0];
        let animation = AnimatedTexture::new(frames, bird::FRAME_DURATION)
            .map_err(|e| GameError::InvalidState(format!("Bird animation: {e}")))?;

        world.spawn(BirdBundle {
            player: PlayerControlled,
            position: Position(bird::START_POSITION),
            velocity: Velocity(glam::Vec2::ZERO),
            collider: Collider { radius },
            tilt: Tilt::default(),
            animated: Animated(animation),
            sprite: Renderable {
                sprite: start_sprite,
                layer: layer::BIRD,
            },
        });

        Ok(())
    }

    fn spawn_layers(world: &mut World, atlas: &SpriteAtlas) -> GameResult<()> {
        let background = atlas.get_tile(BACKGROUND_SPRITE)?;
        let ground = atlas.get_tile(GROUND_SPRITE)?;

        world.spawn(LayerBundle {
            scrolling: Scrolling {
                offset_x: 0.0,
                pos_y: scroll::BACKGROUND_Y,
                speed: scroll::BACKGROUND_SPEED,
            },
            sprite: Renderable {
                sprite: background,
                layer: layer::BACKGROUND,
            },
        });

        world.spawn(LayerBundle {
            scrolling: Scrolling {
                offset_x: 0.0,
                pos_y: scroll::GROUND_Y,
                speed: scroll::GROUND_SPEED,
            },
            sprite: Renderable {
                sprite: ground,
                layer: layer::GROUND,
            },
        });

        Ok(())
    }

    fn insert_resources(
        world: &mut World,
        atlas: SpriteAtlas,
        event_pump: EventPump,
        canvas: Canvas<Window>,
        backbuffer: sdl2::render::Texture,
    ) {
        world.insert_non_send_resource(atlas);
        world.insert_non_send_resource(event_pump);
        world.insert_non_send_resource(canvas);
        world.insert_non_send_resource(BackbufferResource(backbuffer));

        world.insert_resource(GlobalState { exit: false });
        world.insert_resource(Bindings::default());
        world.insert_resource(DeltaTime(0.0));
        world.insert_resource(RunState::default());
        world.insert_resource(PauseState::default());
        world.insert_resource(DebugState::default());
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule
            .add_systems((
                (input_system, control_system).chain().in_set(GameplaySet::Input),
                (physics_system, scroll_system).in_set(GameplaySet::Update),
                (animation_system, tilt_system).in_set(RenderSet::Animation),
                (render_system, hud_render_system, debug_render_system)
                    .chain()
                    .in_set(RenderSet::Draw),
                (present_system, error_log_system).chain().in_set(RenderSet::Present),
            ))
            .configure_sets((
                GameplaySet::Input,
                GameplaySet::Update.run_if(|paused: Res<PauseState>| !paused.active()),
                RenderSet::Animation.run_if(|paused: Res<PauseState>| !paused.active()),
                RenderSet::Draw,
                RenderSet::Present,
            ));
    }

    /// Executes one frame of game logic by running all scheduled ECS systems.
    ///
    /// # Arguments
    ///
    /// * `dt` - Frame delta time in seconds for time-based animation and movement
    ///
    /// # Returns
    ///
    /// `true` if the game should terminate (exit command received), `false` to continue.
    pub fn tick(&mut self, dt: f32) -> GameResult<bool> {
        self.world.insert_resource(DeltaTime(dt));

        self.schedule.run(&mut self.world);

        let state = self
            .world
            .get_resource::<GlobalState>()
            .ok_or_else(|| GameError::InvalidState("GlobalState could not be acquired".to_string()))?;

        Ok(state.exit)
    }
}
