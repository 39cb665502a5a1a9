use grabwm_core::errors::GrabError;
use thiserror::Error;

/// Failures while bringing up the X connection.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("Couldn't load Xlib: {0}")]
    XlibUnavailable(#[from] x11_dl::error::OpenError),
    #[error("Couldn't open the display, is DISPLAY set?")]
    DisplayUnavailable,
    #[error("Couldn't watch the X connection: {0}")]
    Io(#[from] std::io::Error),
    #[error("X request failed")]
    FailedStatus,
}

impl From<DisplayError> for GrabError {
    fn from(err: DisplayError) -> Self {
        Self::DisplayServer(err.to_string())
    }
}
