use strum_macros::{Display, EnumString};
use thiserror::Error;

use super::enums::ExtremumKind;

/// Error codes for the band index computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[repr(i32)]
pub enum ErrCode {
    // Calculation errors (0-99)
    #[strum(serialize = "_BAND_ERR_BEGIN")]
    BandErrBegin = 0,
    #[strum(serialize = "INSUFFICIENT_DATA")]
    InsufficientData = 2,
    #[strum(serialize = "CONFIG_ERROR")]
    ConfigError = 3,
    #[strum(serialize = "RENDER_ERROR")]
    RenderError = 4,
    #[strum(serialize = "IO_ERROR")]
    IoError = 5,
    #[strum(serialize = "_BAND_ERR_END")]
    BandErrEnd = 99,

    // Price data errors (200-299)
    #[strum(serialize = "_PRICE_ERR_BEGIN")]
    PriceErrBegin = 200,
    #[strum(serialize = "INVALID_INPUT")]
    InvalidInput = 201,
    #[strum(serialize = "_PRICE_ERR_END")]
    PriceErrEnd = 299,
}

impl ErrCode {
    pub fn is_price_err(&self) -> bool {
        let code = *self as i32;
        code > Self::PriceErrBegin as i32 && code < Self::PriceErrEnd as i32
    }

    pub fn is_band_err(&self) -> bool {
        let code = *self as i32;
        code > Self::BandErrBegin as i32 && code < Self::BandErrEnd as i32
    }
}

#[derive(Debug, Error)]
pub enum BandError {
    /// A row cannot be used where a logarithm is required.
    #[error("row {row} ({date}): {msg}")]
    InvalidInput {
        row: usize,
        date: String,
        msg: String,
    },

    /// Too few usable extremum rows to fit a regression.
    #[error("{kind} regression needs at least {required} points with a defined baseline, got {actual}")]
    InsufficientData {
        kind: ExtremumKind,
        required: usize,
        actual: usize,
    },

    /// Enough points, but the time coordinate carries no variance.
    #[error("{kind} regression is degenerate: {msg}")]
    DegenerateRegression { kind: ExtremumKind, msg: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl BandError {
    pub fn invalid_input(row: usize, date: impl ToString, msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            row,
            date: date.to_string(),
            msg: msg.into(),
        }
    }

    pub fn errcode(&self) -> ErrCode {
        match self {
            Self::InvalidInput { .. } => ErrCode::InvalidInput,
            Self::InsufficientData { .. } | Self::DegenerateRegression { .. } => {
                ErrCode::InsufficientData
            }
            Self::Config(_) | Self::Json(_) => ErrCode::ConfigError,
            Self::Render(_) => ErrCode::RenderError,
            Self::Io(_) => ErrCode::IoError,
        }
    }

    /// True for both the too-few-points and the zero-variance cases.
    pub fn is_insufficient_data(&self) -> bool {
        self.errcode() == ErrCode::InsufficientData
    }

    pub fn is_price_err(&self) -> bool {
        self.errcode().is_price_err()
    }

    pub fn is_band_err(&self) -> bool {
        self.errcode().is_band_err()
    }
}
