use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("sun never reaches altitude {altitude_deg}° at latitude {latitude_deg}°")]
    UnreachableAltitude { altitude_deg: f64, latitude_deg: f64 },

    #[error("qibla direction is undefined at the Ka'aba or its antipode")]
    QiblaUndefined,

    #[error("moon accuracy level {0} out of range (0-3)")]
    InvalidAccuracy(u8),

    #[error("unknown method name {0:?}")]
    UnknownMethod(String),
}

pub type CalcResult<T> = Result<T, CalcError>;
