/// Default tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const FIELD_WIDTH: f32 = 500.0;
    pub const FIELD_HEIGHT: f32 = 500.0;
    pub const BAR_THICKNESS: f32 = 20.0;
    pub const MARGIN: f32 = 40.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 600.0; // units per second (10 per frame at 60 Hz)
    pub const MIN_PADDLE_SPEED: f32 = 5.0; // units per tracker step
    pub const MAX_PADDLE_SPEED: f32 = 15.0; // units per tracker step

    // Elastic tracking
    pub const PLAYER_ELASTICITY: f32 = 0.5;
    pub const AI_ELASTICITY: f32 = 0.2;
    pub const TRACKING_DT: f32 = 1.0 / 60.0; // Step the min/max paddle speeds and elasticities refer to

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED_X: f32 = 600.0;
    pub const BALL_SPEED_Y: f32 = 300.0;

    // Key bindings
    pub const LEFT_UP_KEY: &'static str = "W";
    pub const LEFT_DOWN_KEY: &'static str = "S";
    pub const RIGHT_UP_KEY: &'static str = "ARROW_UP";
    pub const RIGHT_DOWN_KEY: &'static str = "ARROW_DOWN";

    // Driver
    pub const FIXED_DT: f32 = 1.0 / 60.0;
}
