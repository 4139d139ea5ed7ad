use serde::{Deserialize, Serialize};

use crate::components::{Control, Side};
use crate::error::ConfigError;
use crate::map::Playfield;
use crate::params::Params;

/// How the human drives the left paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlMode {
    Keyboard,
    #[default]
    Pointer,
}

/// Up/down key identifiers for one paddle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: String,
    pub down: String,
}

impl KeyBindings {
    pub fn new(up: impl Into<String>, down: impl Into<String>) -> Self {
        Self {
            up: up.into(),
            down: down.into(),
        }
    }
}

/// Elastic tracking tuning shared by the pointer paddle and the AI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tracking {
    pub elasticity: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Tracking {
    /// Rescale per-step tuning to a tick of `dt` seconds.
    /// A tick of `Params::TRACKING_DT` leaves the values unchanged.
    pub fn scaled(&self, dt: f32) -> Self {
        let steps = dt / Params::TRACKING_DT;
        Self {
            elasticity: 1.0 - (1.0 - self.elasticity).powf(steps),
            min_speed: self.min_speed * steps,
            max_speed: self.max_speed * steps,
        }
    }
}

/// Input and paddle-speed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub mode: ControlMode,
    pub left_keys: KeyBindings,
    pub right_keys: KeyBindings,
    pub paddle_speed: f32,
    pub min_paddle_speed: f32,
    pub max_paddle_speed: f32,
    pub player_elasticity: f32,
    pub ai_elasticity: f32,
    pub multiplayer: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            mode: ControlMode::default(),
            left_keys: KeyBindings::new(Params::LEFT_UP_KEY, Params::LEFT_DOWN_KEY),
            right_keys: KeyBindings::new(Params::RIGHT_UP_KEY, Params::RIGHT_DOWN_KEY),
            paddle_speed: Params::PADDLE_SPEED,
            min_paddle_speed: Params::MIN_PADDLE_SPEED,
            max_paddle_speed: Params::MAX_PADDLE_SPEED,
            player_elasticity: Params::PLAYER_ELASTICITY,
            ai_elasticity: Params::AI_ELASTICITY,
            multiplayer: false,
        }
    }
}

impl ControlsConfig {
    pub fn keys(&self, side: Side) -> &KeyBindings {
        match side {
            Side::Left => &self.left_keys,
            Side::Right => &self.right_keys,
        }
    }

    /// Control source for a paddle, fixed for the session
    pub fn control_for(&self, side: Side) -> Control {
        match (side, self.mode) {
            (Side::Left, ControlMode::Keyboard) => Control::Keyboard,
            (Side::Left, ControlMode::Pointer) => Control::Pointer,
            (Side::Right, _) if self.multiplayer => Control::Keyboard,
            (Side::Right, _) => Control::Ai,
        }
    }

    pub fn player_tracking(&self) -> Tracking {
        Tracking {
            elasticity: self.player_elasticity,
            min_speed: self.min_paddle_speed,
            max_speed: self.max_paddle_speed,
        }
    }

    pub fn ai_tracking(&self) -> Tracking {
        Tracking {
            elasticity: self.ai_elasticity,
            min_speed: self.min_paddle_speed,
            max_speed: self.max_paddle_speed,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub bar_thickness: f32,
    pub margin: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub controls: ControlsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::FIELD_WIDTH,
            height: Params::FIELD_HEIGHT,
            bar_thickness: Params::BAR_THICKNESS,
            margin: Params::MARGIN,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            controls: ControlsConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON document over the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.width, self.height, self.bar_thickness, self.margin)
    }

    /// Check every constraint the simulation relies on and return the playfield
    pub fn validate(&self) -> Result<Playfield, ConfigError> {
        let numbers = [
            ("width", self.width),
            ("height", self.height),
            ("bar_thickness", self.bar_thickness),
            ("margin", self.margin),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("ball_speed_x", self.ball_speed_x),
            ("ball_speed_y", self.ball_speed_y),
            ("paddle_speed", self.controls.paddle_speed),
            ("min_paddle_speed", self.controls.min_paddle_speed),
            ("max_paddle_speed", self.controls.max_paddle_speed),
            ("player_elasticity", self.controls.player_elasticity),
            ("ai_elasticity", self.controls.ai_elasticity),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("paddle_speed", self.controls.paddle_speed),
            ("max_paddle_speed", self.controls.max_paddle_speed),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("bar_thickness", self.bar_thickness),
            ("margin", self.margin),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let field = self.playfield();
        if self.paddle_height >= field.channel() {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                channel: field.channel(),
            });
        }

        let elasticities = [
            ("player_elasticity", self.controls.player_elasticity),
            ("ai_elasticity", self.controls.ai_elasticity),
        ];
        for (field, value) in elasticities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ElasticityOutOfRange { field, value });
            }
        }

        if self.controls.min_paddle_speed > self.controls.max_paddle_speed {
            return Err(ConfigError::SpeedRange {
                min: self.controls.min_paddle_speed,
                max: self.controls.max_paddle_speed,
            });
        }

        if self.controls.mode == ControlMode::Pointer && self.controls.multiplayer {
            return Err(ConfigError::UnsupportedControlMode {
                mode: self.controls.mode,
                multiplayer: true,
            });
        }

        Ok(field)
    }
}
