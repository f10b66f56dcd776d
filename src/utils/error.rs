use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for navtoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for navtoc operations
#[derive(Debug)]
pub enum NavtocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Headings file error
    Headings(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for NavtocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavtocError::Io(err) => write!(f, "IO error: {}", err),
            NavtocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            NavtocError::Headings(msg) => write!(f, "Headings error: {}", msg),
            NavtocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for NavtocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NavtocError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for NavtocError {
    fn from(err: io::Error) -> Self {
        NavtocError::Io(err)
    }
}

impl From<String> for NavtocError {
    fn from(msg: String) -> Self {
        NavtocError::Generic(msg)
    }
}

impl From<&str> for NavtocError {
    fn from(msg: &str) -> Self {
        NavtocError::Generic(msg.to_string())
    }
}
