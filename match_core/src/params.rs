/// Fixed tuning parameters for the match simulation
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels, Y grows downward)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_OFFSET: f32 = 30.0; // inset from the side walls
    pub const PADDLE_SPEED: f32 = 400.0; // px per second

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED_INCREMENT: f32 = 20.0; // added per paddle return, capped by settings
    pub const MAX_BOUNCE_ANGLE: f32 = 0.75; // vertical share of the exit velocity at a paddle edge

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Timers (seconds)
    pub const COUNTDOWN_DURATION: f32 = 3.5;
    pub const SCORE_PAUSE_DURATION: f32 = 0.8;
    pub const SCORE_FLASH_DURATION: f32 = 0.5;

    // AI
    pub const AI_TRACK_DEAD_ZONE: f32 = 20.0; // px around the paddle center while tracking
    pub const AI_DRIFT_DEAD_ZONE: f32 = 30.0; // px around mid-court while drifting back

    // Physics
    pub const FIXED_DT: f32 = 0.0166; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
