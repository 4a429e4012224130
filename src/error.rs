/// Everything that can go wrong while talking to the orchestrator.
///
/// Only `Io` is fatal. `StreamClosed` ends the loop normally, and the
/// rest are logged and skipped.
#[derive(Debug)]
pub enum Error {
    /// Unrecognized command token.
    Protocol(String),
    /// `start` arguments missing or out of range.
    InvalidSetup(String),
    /// `move` arguments missing, non-numeric or out of range.
    MalformedRound(String),
    /// `move` before any valid `start`.
    NotReady,
    /// End of input.
    StreamClosed,
    Io(std::io::Error),
}

impl Error {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Protocol(token) => write!(f, "unrecognized command {:?}", token),
            Self::InvalidSetup(why) => write!(f, "invalid setup: {}", why),
            Self::MalformedRound(why) => write!(f, "malformed round: {}", why),
            Self::NotReady => write!(f, "round received before setup"),
            Self::StreamClosed => write!(f, "input stream closed"),
            Self::Io(e) => write!(f, "io: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
