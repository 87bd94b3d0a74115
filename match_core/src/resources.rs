use serde::{Deserialize, Serialize};

use crate::Params;

/// Which half of the arena a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,  // Player 1
    pub right: u8, // Player 2 / Computer
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Decoded key state for one tick. Consumed and discarded, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub paddle1_up: bool,
    pub paddle1_down: bool,
    pub paddle2_up: bool,
    pub paddle2_down: bool,
}

impl InputSnapshot {
    pub fn paddle1_dir(&self) -> i8 {
        Self::dir(self.paddle1_up, self.paddle1_down)
    }

    pub fn paddle2_dir(&self) -> i8 {
        Self::dir(self.paddle2_up, self.paddle2_down)
    }

    fn dir(up: bool, down: bool) -> i8 {
        (down as i8) - (up as i8)
    }
}

/// Current rally's ball speed. Ramps on every return, resets to the base
/// speed after each point.
#[derive(Debug, Clone, Copy, Default)]
pub struct RallyState {
    pub ball_speed: f32,
}

/// Countdown timer and its display label
#[derive(Debug, Clone, Copy, Default)]
pub struct CountdownState {
    pub remaining: f32,
}

impl CountdownState {
    pub fn start(&mut self) {
        self.remaining = Params::COUNTDOWN_DURATION;
    }

    pub fn update(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn finished(&self) -> bool {
        self.remaining <= 0.0
    }

    /// The label is a pure function of the remaining time
    pub fn display(&self) -> &'static str {
        if self.remaining > 3.0 {
            "3"
        } else if self.remaining > 2.0 {
            "2"
        } else if self.remaining > 1.0 {
            "1"
        } else {
            "GO!"
        }
    }
}

/// Post-point freeze and the transient score flash
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEffects {
    pub pause: f32,
    pub flash: Option<Side>,
    pub flash_timer: f32,
}

impl ScoreEffects {
    pub fn start_flash(&mut self, side: Side) {
        self.flash = Some(side);
        self.flash_timer = Params::SCORE_FLASH_DURATION;
    }

    pub fn start_pause(&mut self) {
        self.pause = Params::SCORE_PAUSE_DURATION;
    }

    /// Flash decays independent of phase
    pub fn fade(&mut self, dt: f32) {
        if self.flash_timer > 0.0 {
            self.flash_timer -= dt;
            if self.flash_timer <= 0.0 {
                self.flash = None;
                self.flash_timer = 0.0;
            }
        }
    }

    pub fn paused(&self) -> bool {
        self.pause > 0.0
    }

    pub fn tick_pause(&mut self, dt: f32) {
        self.pause = (self.pause - dt).max(0.0);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Derived counters the progression layer reads at match end
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchStats {
    pub ball_returns: u32,
    pub max_deficit: u8,
    pub reached_deuce: bool,
    pub play_time: f32,
}

impl MatchStats {
    /// Update deficit/deuce bookkeeping after a point was scored
    pub fn record_point(&mut self, score: &Score, win_score: u8) {
        let deficit = score.right.saturating_sub(score.left);
        if deficit > self.max_deficit {
            self.max_deficit = deficit;
        }

        let deuce_line = win_score.saturating_sub(1);
        if score.left >= deuce_line && score.right >= deuce_line {
            self.reached_deuce = true;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment_left();
        score.increment_right();
        score.increment_right();
        assert_eq!(score.left, 1);
        assert_eq!(score.right, 2);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment_left();
        }
        assert_eq!(score.has_winner(5), Some(Side::Left), "Left wins at 5");
        assert_eq!(score.has_winner(6), None, "No winner below threshold");

        let mut score = Score::new();
        for _ in 0..5 {
            score.increment_right();
        }
        assert_eq!(score.has_winner(5), Some(Side::Right), "Right wins at 5");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_input_direction_mapping() {
        let mut input = InputSnapshot::default();
        assert_eq!(input.paddle1_dir(), 0);

        input.paddle1_up = true;
        assert_eq!(input.paddle1_dir(), -1);

        input.paddle1_down = true;
        assert_eq!(input.paddle1_dir(), 0, "Opposite keys cancel out");

        input.paddle1_up = false;
        assert_eq!(input.paddle1_dir(), 1);

        input.paddle2_down = true;
        assert_eq!(input.paddle2_dir(), 1);
    }

    #[test]
    fn test_countdown_display_thresholds() {
        let mut countdown = CountdownState::default();
        countdown.start();
        assert_eq!(countdown.display(), "3");

        countdown.remaining = 2.5;
        assert_eq!(countdown.display(), "2");

        countdown.remaining = 1.5;
        assert_eq!(countdown.display(), "1");

        countdown.remaining = 0.5;
        assert_eq!(countdown.display(), "GO!");

        countdown.remaining = 0.0;
        assert_eq!(countdown.display(), "GO!");
    }

    #[test]
    fn test_countdown_floors_at_zero() {
        let mut countdown = CountdownState::default();
        countdown.start();
        for _ in 0..100 {
            countdown.update(0.1);
        }
        assert_eq!(countdown.remaining, 0.0);
        assert!(countdown.finished());
    }

    #[test]
    fn test_score_flash_fades_out() {
        let mut effects = ScoreEffects::default();
        effects.start_flash(Side::Left);
        assert_eq!(effects.flash, Some(Side::Left));

        effects.fade(0.3);
        assert_eq!(effects.flash, Some(Side::Left), "Flash still visible");

        effects.fade(0.3);
        assert_eq!(effects.flash, None, "Flash gone after its duration");
        assert_eq!(effects.flash_timer, 0.0);
    }

    #[test]
    fn test_score_pause_ticks_down() {
        let mut effects = ScoreEffects::default();
        effects.start_pause();
        assert!(effects.paused());

        for _ in 0..8 {
            effects.tick_pause(0.1);
        }
        assert!(!effects.paused());
    }

    #[test]
    fn test_stats_max_deficit_only_grows() {
        let mut stats = MatchStats::default();
        let mut score = Score::new();

        score.right = 2;
        stats.record_point(&score, 5);
        assert_eq!(stats.max_deficit, 2);

        score.left = 2;
        stats.record_point(&score, 5);
        assert_eq!(stats.max_deficit, 2, "Catching up does not shrink the deficit");
    }

    #[test]
    fn test_stats_deuce_detection() {
        let mut stats = MatchStats::default();
        let mut score = Score::new();

        score.left = 4;
        score.right = 3;
        stats.record_point(&score, 5);
        assert!(!stats.reached_deuce, "4-3 is not deuce at win score 5");

        score.right = 4;
        stats.record_point(&score, 5);
        assert!(stats.reached_deuce, "4-4 is deuce at win score 5");
    }
}
