//! Deterministic real-time Pong match engine.
//!
//! A pure state-transition core: the caller owns the tick loop, gathers the
//! input snapshot (human and/or [`compute_computer_input`]) and calls
//! [`MatchState::update`] once per tick; rendering, persistence, and
//! progression live outside this crate and only read the state.

pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use state::*;
pub use systems::ai::compute_computer_input;

use glam::Vec2;
use hecs::World;

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, player_id: u8, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(player_id, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
