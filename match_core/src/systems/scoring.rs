use hecs::World;

use crate::{
    Ball, Events, GameRng, GameSettings, MatchStats, Params, RallyState, Score, ScoreEffects, Side,
};

/// Check if the ball fully exited a side edge and resolve the point.
/// Returns the winning side when this point ends the match; the caller
/// performs the phase transition.
#[allow(clippy::too_many_arguments)]
pub fn check_scoring(
    world: &mut World,
    score: &mut Score,
    rally: &mut RallyState,
    effects: &mut ScoreEffects,
    stats: &mut MatchStats,
    events: &mut Events,
    rng: &mut GameRng,
    settings: &GameSettings,
) -> Option<Side> {
    let ball_x = {
        let mut ball_query = world.query::<&Ball>();
        match ball_query.iter().next() {
            Some((_e, ball)) => ball.pos.x,
            None => return None,
        }
    };

    let radius = Params::BALL_RADIUS;
    let scorer = if ball_x + radius < 0.0 {
        Side::Right
    } else if ball_x - radius > Params::ARENA_WIDTH {
        Side::Left
    } else {
        return None;
    };

    match scorer {
        Side::Left => {
            score.increment_left();
            events.left_scored = true;
        }
        Side::Right => {
            score.increment_right();
            events.right_scored = true;
        }
    }
    effects.start_flash(scorer);
    stats.record_point(score, settings.win_score);

    if let Some(winner) = score.has_winner(settings.win_score) {
        return Some(winner);
    }

    // Freeze briefly, then the loser receives the next serve at base speed
    effects.start_pause();
    rally.ball_speed = settings.ball_speed;
    let serve_to = scorer.opponent();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.relaunch(settings.ball_speed, serve_to, rng);
    }

    None
}
