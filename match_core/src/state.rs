//! Match lifecycle state and the per-tick `update` entry point.

use glam::Vec2;
use hecs::World;
use serde::{Deserialize, Serialize};

use crate::systems::{apply_inputs, check_collisions, check_scoring, move_ball, move_paddles};
use crate::{
    create_ball, create_paddle, Ball, CountdownState, Events, GameMode, GameRng, GameSettings,
    InputSnapshot, MatchStats, Paddle, Params, RallyState, Score, ScoreEffects, Side,
};

/// Coarse lifecycle state of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Menu,
    Countdown,
    Playing,
    GameOver,
}

/// The complete mutable state of one match. Created fresh per match and
/// driven by a single caller loop; renderers read it but never mutate it.
pub struct MatchState {
    pub world: World,
    pub phase: Phase,
    pub score: Score,
    pub rally: RallyState,
    pub countdown: CountdownState,
    pub effects: ScoreEffects,
    pub stats: MatchStats,
    pub events: Events,
    pub rng: GameRng,
    pub winner: Option<Side>,
}

impl MatchState {
    pub fn new() -> Self {
        let mut world = World::new();
        let paddle_y = Params::ARENA_HEIGHT / 2.0 - Params::PADDLE_HEIGHT / 2.0;
        create_paddle(&mut world, 0, paddle_y);
        create_paddle(&mut world, 1, paddle_y);
        create_ball(
            &mut world,
            Vec2::new(Params::ARENA_WIDTH / 2.0, Params::ARENA_HEIGHT / 2.0),
            Vec2::ZERO,
        );

        Self {
            world,
            phase: Phase::Menu,
            score: Score::new(),
            rally: RallyState::default(),
            countdown: CountdownState::default(),
            effects: ScoreEffects::default(),
            stats: MatchStats::default(),
            events: Events::new(),
            rng: GameRng::default(),
            winner: None,
        }
    }

    /// Fixed seed for reproducible serve draws
    pub fn with_seed(seed: u64) -> Self {
        let mut state = Self::new();
        state.rng = GameRng::new(seed);
        state
    }

    /// MENU -> COUNTDOWN
    pub fn start_countdown(&mut self, settings: &GameSettings) {
        if self.phase != Phase::Menu {
            return;
        }
        settings.debug_validate();

        self.phase = Phase::Countdown;
        self.countdown.start();
        self.rally.ball_speed = settings.ball_speed;
        self.stats.play_time = 0.0;
        self.reset_positions();
    }

    /// True once the countdown has run out. The engine never leaves the
    /// countdown on its own; the caller observes this and calls
    /// `start_playing`.
    pub fn countdown_finished(&self) -> bool {
        self.phase == Phase::Countdown && self.countdown.finished()
    }

    /// COUNTDOWN -> PLAYING. Launches the ball toward a random side.
    pub fn start_playing(&mut self, settings: &GameSettings) {
        if self.phase != Phase::Countdown {
            return;
        }
        use rand::Rng;

        self.phase = Phase::Playing;
        let direction = if self.rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let vertical = settings.ball_speed * (self.rng.0.gen::<f32>() - 0.5);
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.vel = Vec2::new(settings.ball_speed * direction, vertical);
        }
    }

    /// PLAYING -> GAMEOVER, on the winning point
    fn end_game(&mut self, winner: Side) {
        self.phase = Phase::GameOver;
        self.winner = Some(winner);
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.vel = Vec2::ZERO;
        }
    }

    /// GAMEOVER -> MENU. Re-zeroes scores and counters, re-centers positions.
    pub fn return_to_menu(&mut self) {
        if self.phase != Phase::GameOver {
            return;
        }
        self.phase = Phase::Menu;
        self.score = Score::new();
        self.stats.reset();
        self.effects.clear();
        self.winner = None;
        self.reset_positions();
    }

    fn reset_positions(&mut self) {
        let paddle_y = Params::ARENA_HEIGHT / 2.0 - Params::PADDLE_HEIGHT / 2.0;
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = paddle_y;
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = Vec2::new(Params::ARENA_WIDTH / 2.0, Params::ARENA_HEIGHT / 2.0);
            ball.vel = Vec2::ZERO;
        }
    }

    /// Advance the match by `dt` seconds. Called exactly once per tick with
    /// `dt >= 0` by the single driving loop.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot, settings: &GameSettings) {
        self.events.clear();

        // Clamp dt to prevent large jumps, then fixed micro-steps for stable physics
        let mut remaining_dt = dt.clamp(0.0, Params::MAX_DT);
        while remaining_dt > 0.0 {
            let step_dt = remaining_dt.min(Params::FIXED_DT);
            remaining_dt -= step_dt;
            self.step(step_dt, input, settings);
        }
    }

    fn step(&mut self, dt: f32, input: &InputSnapshot, settings: &GameSettings) {
        // Score flash fades in every phase
        self.effects.fade(dt);

        match self.phase {
            Phase::Countdown => self.step_countdown(dt, input),
            Phase::Playing => self.step_playing(dt, input, settings),
            Phase::Menu | Phase::GameOver => {}
        }
    }

    /// Countdown ticks down while the ball waits; paddles are already live
    fn step_countdown(&mut self, dt: f32, input: &InputSnapshot) {
        self.countdown.update(dt);
        apply_inputs(&mut self.world, input);
        move_paddles(&mut self.world, dt);
    }

    fn step_playing(&mut self, dt: f32, input: &InputSnapshot, settings: &GameSettings) {
        // Post-point freeze: gives players a beat to react; play time
        // does not accrue while frozen
        if self.effects.paused() {
            self.effects.tick_pause(dt);
            return;
        }

        self.stats.play_time += dt;

        apply_inputs(&mut self.world, input);
        move_paddles(&mut self.world, dt);
        move_ball(&mut self.world, dt);
        check_collisions(
            &mut self.world,
            &mut self.rally,
            settings,
            &mut self.events,
            &mut self.stats,
        );

        if let Some(winner) = check_scoring(
            &mut self.world,
            &mut self.score,
            &mut self.rally,
            &mut self.effects,
            &mut self.stats,
            &mut self.events,
            &mut self.rng,
            settings,
        ) {
            self.end_game(winner);
        }
    }

    /// Winner display label, available once the match is over
    pub fn winner_label(&self, mode: GameMode) -> Option<&'static str> {
        self.winner.map(|side| match (side, mode) {
            (Side::Left, _) => "Player 1",
            (Side::Right, GameMode::Local) => "Player 2",
            (Side::Right, GameMode::Computer) => "Computer",
        })
    }

    /// Flat read model for the renderer
    pub fn snapshot(&self) -> MatchSnapshot {
        let (ball_x, ball_y, ball_vx, ball_vy) = {
            let mut ball_query = self.world.query::<&Ball>();
            ball_query
                .iter()
                .next()
                .map(|(_e, ball)| (ball.pos.x, ball.pos.y, ball.vel.x, ball.vel.y))
                .unwrap_or((
                    Params::ARENA_WIDTH / 2.0,
                    Params::ARENA_HEIGHT / 2.0,
                    0.0,
                    0.0,
                ))
        };

        let center_y = Params::ARENA_HEIGHT / 2.0 - Params::PADDLE_HEIGHT / 2.0;
        let mut paddle1_y = center_y;
        let mut paddle2_y = center_y;
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            if paddle.player_id == 0 {
                paddle1_y = paddle.y;
            } else {
                paddle2_y = paddle.y;
            }
        }

        MatchSnapshot {
            phase: self.phase,
            paddle1_y,
            paddle2_y,
            ball_x,
            ball_y,
            ball_vx,
            ball_vy,
            ball_speed: self.rally.ball_speed,
            score1: self.score.left,
            score2: self.score.right,
            countdown_display: (self.phase == Phase::Countdown).then(|| self.countdown.display()),
            score_flash: self.effects.flash,
            play_time: self.stats.play_time,
            winner: self.winner,
        }
    }

    /// End-of-match payload the caller forwards to the progression service.
    /// `None` until the match is over.
    pub fn result(&self, settings: &GameSettings) -> Option<MatchResult> {
        let winner = self.winner_label(settings.mode)?;
        Some(MatchResult {
            score1: self.score.left,
            score2: self.score.right,
            winner,
            win_score: settings.win_score,
            mode: settings.mode,
            ball_returns: self.stats.ball_returns,
            max_deficit: self.stats.max_deficit,
            reached_deuce: self.stats.reached_deuce,
            play_time_seconds: self.stats.play_time,
        })
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-frame read model handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchSnapshot {
    pub phase: Phase,
    pub paddle1_y: f32,
    pub paddle2_y: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub ball_speed: f32,
    pub score1: u8,
    pub score2: u8,
    pub countdown_display: Option<&'static str>,
    pub score_flash: Option<Side>,
    pub play_time: f32,
    pub winner: Option<Side>,
}

/// Opaque result payload consumed by the progression layer
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub score1: u8,
    pub score2: u8,
    pub winner: &'static str,
    pub win_score: u8,
    pub mode: GameMode,
    pub ball_returns: u32,
    pub max_deficit: u8,
    pub reached_deuce: bool,
    pub play_time_seconds: f32,
}
