use hecs::World;

use crate::{Ball, Events, GameSettings, MatchStats, Paddle, Params, RallyState};

/// Horizontal extent (min, max) of a paddle's body
pub fn paddle_x_range(player_id: u8) -> (f32, f32) {
    if player_id == 0 {
        (
            Params::PADDLE_OFFSET,
            Params::PADDLE_OFFSET + Params::PADDLE_WIDTH,
        )
    } else {
        (
            Params::ARENA_WIDTH - Params::PADDLE_OFFSET - Params::PADDLE_WIDTH,
            Params::ARENA_WIDTH - Params::PADDLE_OFFSET,
        )
    }
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(
    world: &mut World,
    rally: &mut RallyState,
    settings: &GameSettings,
    events: &mut Events,
    stats: &mut MatchStats,
) {
    // Collect ball data without holding the borrow
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let (mut ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    let radius = Params::BALL_RADIUS;

    // Top/bottom wall reflection: clamp to the boundary and force the
    // vertical sign outward so a deep overlap cannot re-trigger
    if ball_pos.y - radius <= 0.0 {
        ball_pos.y = radius;
        ball_vel.y = ball_vel.y.abs();
        events.ball_hit_wall = true;
    }
    if ball_pos.y + radius >= Params::ARENA_HEIGHT {
        ball_pos.y = Params::ARENA_HEIGHT - radius;
        ball_vel.y = -ball_vel.y.abs();
        events.ball_hit_wall = true;
    }

    let paddles: Vec<(u8, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.player_id, p.y))
        .collect();

    for (player_id, paddle_y) in paddles {
        // Each paddle is only checked when the ball moves toward it,
        // which prevents a double bounce on the next tick
        let approaching =
            (player_id == 0 && ball_vel.x < 0.0) || (player_id == 1 && ball_vel.x > 0.0);
        if !approaching {
            continue;
        }

        let (face_min, face_max) = paddle_x_range(player_id);
        let overlaps_x = ball_pos.x - radius <= face_max && ball_pos.x + radius >= face_min;
        let overlaps_y = ball_pos.y + radius >= paddle_y
            && ball_pos.y - radius <= paddle_y + Params::PADDLE_HEIGHT;

        if overlaps_x && overlaps_y {
            stats.ball_returns += 1;

            // Impact position relative to the paddle center: -1 top edge, 1 bottom edge
            let half_height = Params::PADDLE_HEIGHT / 2.0;
            let offset = ((ball_pos.y - (paddle_y + half_height)) / half_height).clamp(-1.0, 1.0);

            // Every return ramps the rally speed, capped
            rally.ball_speed =
                (rally.ball_speed + Params::BALL_SPEED_INCREMENT).min(settings.max_ball_speed);

            // Normalized-vector bounce: hit position sets the exit angle and
            // |velocity| stays exactly at the rally speed
            let bounce_angle = offset * Params::MAX_BOUNCE_ANGLE;
            let direction = if player_id == 0 { 1.0 } else { -1.0 };
            ball_vel.y = rally.ball_speed * bounce_angle;
            ball_vel.x = rally.ball_speed * (1.0 - bounce_angle * bounce_angle).sqrt() * direction;

            // Reposition flush against the paddle face to prevent tunneling
            ball_pos.x = if player_id == 0 {
                face_max + radius
            } else {
                face_min - radius
            };

            events.ball_hit_paddle = true;
            break;
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = ball_pos;
        ball.vel = ball_vel;
    }
}
