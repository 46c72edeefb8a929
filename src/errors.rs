// src/errors.rs
//
// Error type shared by config loading and the control surfaces

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("could not read config file: {0}")]
    ConfigRead(#[from] io::Error),

    #[error("could not parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid fixed time '{0}', expected HH:MM")]
    InvalidFixedTime(String),

    #[error("could not bind OSC receiver on port {port}: {reason}")]
    OscBind { port: u16, reason: String },
}
