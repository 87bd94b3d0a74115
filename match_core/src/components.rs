use glam::Vec2;

use crate::{GameRng, Params, Side};

/// Paddle component - `y` is the TOP edge, clamped to the arena
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = left, 1 = right
    pub y: f32,
}

impl Paddle {
    pub fn new(player_id: u8, y: f32) -> Self {
        Self { player_id, y }
    }

    /// Y of the paddle center
    pub fn center(&self) -> f32 {
        self.y + Params::PADDLE_HEIGHT / 2.0
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - `pos` is the center
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Re-center between points and serve toward `serve_to`.
    /// The horizontal direction is fixed (the loser receives the serve);
    /// only the vertical component is drawn from the rng.
    pub fn relaunch(&mut self, speed: f32, serve_to: Side, rng: &mut GameRng) {
        use rand::Rng;
        self.pos = Vec2::new(Params::ARENA_WIDTH / 2.0, Params::ARENA_HEIGHT / 2.0);
        let direction = match serve_to {
            Side::Left => -1.0,
            Side::Right => 1.0,
        };
        self.vel = Vec2::new(speed * direction, speed * (rng.0.gen::<f32>() - 0.5));
    }
}
