#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("store: {0}")]
    Store(String),

    #[error("nutrition: {0}")]
    Nutrition(String),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Store(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! not_found {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::NotFound(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::NotFound(format!($fmt, $($arg)*)))
    };
}
