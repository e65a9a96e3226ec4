//! Host-to-native argument conversion.

use crate::error::{Error, Result};
use std::ffi::{CString, c_int};
use std::path::Path;

pub(crate) fn c_string(value: &str) -> Result<CString> {
    CString::new(value)
        .map_err(|_| Error::invalid_arg(format!("string contains an interior nul byte: {:?}", value)))
}

/// SDL expects UTF-8 file names on every platform.
pub(crate) fn c_path(path: &Path) -> Result<CString> {
    let utf8 = path
        .to_str()
        .ok_or_else(|| Error::invalid_arg(format!("path is not valid UTF-8: {}", path.display())))?;
    c_string(utf8)
}

pub(crate) fn c_bool(value: bool) -> c_int {
    value as c_int
}
