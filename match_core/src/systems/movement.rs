use hecs::World;

use crate::{Ball, Paddle, PaddleIntent, Params};

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, dt: f32) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.y += intent.dir as f32 * Params::PADDLE_SPEED * dt;

            // Clamp the top edge to the arena
            paddle.y = paddle.y.clamp(0.0, Params::ARENA_HEIGHT - Params::PADDLE_HEIGHT);
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, dt: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_paddle_moves_by_intent() {
        let mut world = World::new();
        let entity = create_paddle(&mut world, 0, 210.0);
        world.get::<&mut PaddleIntent>(entity).unwrap().dir = 1;

        move_paddles(&mut world, 0.1);

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.y, 210.0 + Params::PADDLE_SPEED * 0.1);
    }

    #[test]
    fn test_paddle_clamped_to_arena() {
        let mut world = World::new();
        let top = create_paddle(&mut world, 0, 5.0);
        let bottom = create_paddle(&mut world, 1, Params::ARENA_HEIGHT - Params::PADDLE_HEIGHT - 5.0);
        world.get::<&mut PaddleIntent>(top).unwrap().dir = -1;
        world.get::<&mut PaddleIntent>(bottom).unwrap().dir = 1;

        for _ in 0..10 {
            move_paddles(&mut world, 0.1);
        }

        assert_eq!(world.get::<&Paddle>(top).unwrap().y, 0.0);
        assert_eq!(
            world.get::<&Paddle>(bottom).unwrap().y,
            Params::ARENA_HEIGHT - Params::PADDLE_HEIGHT
        );
    }

    #[test]
    fn test_ball_integrates_velocity() {
        let mut world = World::new();
        let entity = create_ball(&mut world, Vec2::new(400.0, 250.0), Vec2::new(300.0, -100.0));

        move_ball(&mut world, 0.1);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert!((ball.pos.x - 430.0).abs() < 1e-4);
        assert!((ball.pos.y - 240.0).abs() < 1e-4);
    }
}
