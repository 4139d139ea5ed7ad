use std::fmt;

use crate::config::ControlMode;

/// Configuration problems detected before a session starts
#[derive(Debug)]
pub enum ConfigError {
    /// NaN or infinite value
    NonFinite { field: &'static str, value: f32 },
    /// A dimension or speed that must be strictly positive is not
    NonPositive { field: &'static str, value: f32 },
    /// A bar thickness or margin below zero
    Negative { field: &'static str, value: f32 },
    /// Paddle does not fit between the top and bottom bars
    PaddleTooTall { paddle_height: f32, channel: f32 },
    /// Elasticity outside [0, 1]
    ElasticityOutOfRange { field: &'static str, value: f32 },
    /// min_paddle_speed is greater than max_paddle_speed
    SpeedRange { min: f32, max: f32 },
    /// Control mode cannot drive every human paddle
    UnsupportedControlMode { mode: ControlMode, multiplayer: bool },
    /// JSON configuration could not be parsed
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite { field, value } => {
                write!(f, "{} must be finite, got {}", field, value)
            }
            ConfigError::Negative { field, value } => {
                write!(f, "{} must not be negative, got {}", field, value)
            }
            ConfigError::NonPositive { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            ConfigError::PaddleTooTall {
                paddle_height,
                channel,
            } => write!(
                f,
                "paddle height {} does not fit in the {} unit play channel",
                paddle_height, channel
            ),
            ConfigError::ElasticityOutOfRange { field, value } => {
                write!(f, "{} must be within [0, 1], got {}", field, value)
            }
            ConfigError::SpeedRange { min, max } => write!(
                f,
                "min paddle speed {} exceeds max paddle speed {}",
                min, max
            ),
            ConfigError::UnsupportedControlMode { mode, multiplayer } => write!(
                f,
                "control mode {:?} with multiplayer={} leaves a human paddle without input",
                mode, multiplayer
            ),
            ConfigError::Parse(err) => write!(f, "invalid config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
