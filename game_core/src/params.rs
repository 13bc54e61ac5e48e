/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 40.0; // Distance from court edge to paddle center
    pub const KEYBOARD_PADDLE_SPEED: f32 = 400.0; // units per second

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 250.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
    pub const BALL_SPIN: f32 = 0.75; // Vertical speed per unit of hit offset, relative to speed
    pub const LAUNCH_MAX_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    // Score
    pub const WIN_SCORE: u32 = 7;
    pub const SCORE_PAUSE: f32 = 1.5; // seconds

    // Physics
    pub const MAX_DT: f32 = 0.1; // Larger steps are dropped (tab suspension)

    // Particles
    pub const SPARKS_WALL: usize = 4;
    pub const SPARKS_PADDLE: usize = 10;
    pub const SPARKS_SCORE: usize = 24;
    pub const SPARK_SPEED: f32 = 200.0;
}
