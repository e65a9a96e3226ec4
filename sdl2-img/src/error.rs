use crate::sys;
use std::ffi::{CStr, c_int};
use std::ptr::NonNull;

/// Error produced by the safe wrappers around SDL2_image.
///
/// The text carried by [`Error::OperationFailed`] comes from [`get_error`] at the
/// moment the native call reports failure, with the same limits: it can be empty or
/// stale, and concurrent failures may race on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `IMG_Init` did not bring up every requested backend.
    #[error("SDL_image initialization failed")]
    InitializationFailed,
    /// A load, save or argument conversion failed; carries the native message.
    #[error("{0}")]
    OperationFailed(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap whatever SDL currently holds in its error slot.
    pub(crate) fn last() -> Self {
        let message = get_error();
        log::trace!("SDL_image call failed: {}", message);
        Error::OperationFailed(message)
    }

    pub(crate) fn invalid_arg(msg: impl Into<String>) -> Self {
        Error::OperationFailed(msg.into())
    }

    /// The native message, if this is an operation failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::InitializationFailed => None,
            Error::OperationFailed(msg) => Some(msg),
        }
    }
}

/// Copy SDL's most recent error message into an owned string.
///
/// `IMG_GetError` is a macro over `SDL_GetError`, so this reads the same slot.
/// SDL keeps only the latest message, not a history: when several calls fail
/// concurrently, the message read here may belong to a different failure than the
/// one being reported, and it may be empty or stale if the library set none.
pub fn get_error() -> String {
    // SAFETY: SDL_GetError returns a pointer to a NUL-terminated buffer it owns.
    let ptr = unsafe { sys::SDL_GetError() };
    if ptr.is_null() {
        return String::new();
    }
    // SAFETY: non-null and NUL-terminated per the SDL contract; copied immediately.
    unsafe { CStr::from_ptr(ptr) }
        .to_string_lossy()
        .into_owned()
}

/// Null handle means failure.
pub(crate) fn check_ptr<T>(ptr: *mut T) -> Result<NonNull<T>> {
    NonNull::new(ptr).ok_or_else(Error::last)
}

/// Non-zero return code means failure.
pub(crate) fn check_code(rc: c_int) -> Result<()> {
    if rc == 0 { Ok(()) } else { Err(Error::last()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_failure_has_fixed_text() {
        assert_eq!(
            Error::InitializationFailed.to_string(),
            "SDL_image initialization failed"
        );
        assert_eq!(Error::InitializationFailed.message(), None);
    }

    #[test]
    fn operation_failure_displays_message_verbatim() {
        let err = Error::OperationFailed("Unsupported image format".into());
        assert_eq!(err.to_string(), "Unsupported image format");
        assert_eq!(err.message(), Some("Unsupported image format"));
    }

    #[test]
    fn check_code_accepts_zero_only() {
        assert!(check_code(0).is_ok());
        assert!(matches!(check_code(-1), Err(Error::OperationFailed(_))));
    }
}
