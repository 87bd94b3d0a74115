use crate::{Ball, InputSnapshot, MatchState, Paddle, Params};

/// Synthetic input for the right paddle in computer mode.
///
/// Deliberately imperfect: dead-zone tracking with no predictive lead, so a
/// human can aim around it. Deterministic for a given state. The caller only
/// wires this in when `settings.mode == GameMode::Computer`.
pub fn compute_computer_input(state: &MatchState) -> InputSnapshot {
    let ball_data = {
        let mut ball_query = state.world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };
    let paddle_center = {
        let mut paddle_query = state.world.query::<&Paddle>();
        paddle_query
            .iter()
            .find(|(_e, paddle)| paddle.player_id == 1)
            .map(|(_e, paddle)| paddle.center())
    };

    let ((ball_pos, ball_vel), paddle_center) = match (ball_data, paddle_center) {
        (Some(ball), Some(center)) => (ball, center),
        _ => return InputSnapshot::default(),
    };

    let mut move_up = false;
    let mut move_down = false;

    if ball_vel.x > 0.0 {
        // Ball coming toward us: track it, with a dead-zone against twitchy
        // oscillation around the target
        if ball_pos.y < paddle_center - Params::AI_TRACK_DEAD_ZONE {
            move_up = true;
        } else if ball_pos.y > paddle_center + Params::AI_TRACK_DEAD_ZONE {
            move_down = true;
        }
    } else {
        // Ball moving away: drift back toward mid-court
        let arena_center = Params::ARENA_HEIGHT / 2.0;
        if paddle_center < arena_center - Params::AI_DRIFT_DEAD_ZONE {
            move_down = true;
        } else if paddle_center > arena_center + Params::AI_DRIFT_DEAD_ZONE {
            move_up = true;
        }
    }

    InputSnapshot {
        // Computer never controls paddle 1
        paddle1_up: false,
        paddle1_down: false,
        paddle2_up: move_up,
        paddle2_down: move_down,
    }
}
