use thiserror::Error;

/// Result type returned from functions that can have our `Error`s.
pub type Result<T, E = GbacklightError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GbacklightError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("{0}")]
    X11Connection(#[from] x11rb::errors::ConnectionError),

    #[error("{0}")]
    X11Reply(#[from] x11rb::errors::ReplyError),

    #[error("Can't open display \"{0}\"")]
    CannotOpenDisplay(String),

    #[error("RandR extension missing")]
    RandrMissing,

    #[error("RandR version {major}.{minor} too old")]
    RandrTooOld { major: u32, minor: u32 },

    #[error("No outputs have {0} property")]
    NoBacklightProperty(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_diagnostics() {
        assert_eq!(
            GbacklightError::CannotOpenDisplay(":7".into()).to_string(),
            "Can't open display \":7\""
        );
        assert_eq!(
            GbacklightError::RandrMissing.to_string(),
            "RandR extension missing"
        );
        assert_eq!(
            GbacklightError::RandrTooOld { major: 1, minor: 1 }.to_string(),
            "RandR version 1.1 too old"
        );
        assert_eq!(
            GbacklightError::NoBacklightProperty("BACKLIGHT".into()).to_string(),
            "No outputs have BACKLIGHT property"
        );
    }
}
