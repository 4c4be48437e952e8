use thiserror::Error;

/// Top-level error type for the keymill toolpath generator.
#[derive(Debug, Error)]
pub enum KeymillError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    GCode(#[from] GCodeError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate segment: both points are ({x}, {y})")]
    DegenerateSegment { x: f64, y: f64 },

    #[error("singular system: lines are parallel")]
    SingularSystem,

    #[error("zero-length vector")]
    ZeroVector,

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Errors related to the lock code given by the caller.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("no {0} code given")]
    MissingInput(&'static str),

    #[error("invalid code: {0}")]
    InvalidCode(String),

    #[error("digit {digit} exceeds the maximum digit value {max}")]
    DigitOutOfRange { digit: u8, max: u8 },

    #[error("code has {count} digits but only {max} pin positions exist")]
    TooManyPositions { count: usize, max: usize },
}

/// Errors related to curve operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to loading or validating the machine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors related to writing G-code.
#[derive(Debug, Error)]
pub enum GCodeError {
    #[error("at least one of X, Y, Z must be given")]
    NoAxis,

    #[error("failed to write G-code: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`KeymillError`].
pub type Result<T> = std::result::Result<T, KeymillError>;
