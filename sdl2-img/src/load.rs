//! Surface loaders.

use crate::error::{Result, check_ptr};
use crate::ffi::{c_bool, c_path, c_string};
use crate::format::ImageFormat;
use crate::rwops::RWops;
use crate::sys;
use crate::types::Surface;
use std::path::Path;

/// Load an image file, letting SDL_image pick the decoder from its contents.
pub fn load(path: impl AsRef<Path>) -> Result<Surface> {
    let file = c_path(path.as_ref())?;
    // SAFETY: `file` is a valid C string for the duration of the call.
    let ptr = unsafe { sys::IMG_Load(file.as_ptr()) };
    check_ptr(ptr).map(Surface::new)
}

/// Load from a stream the caller keeps.
pub fn load_rw(src: &mut RWops<'_>) -> Result<Surface> {
    // SAFETY: stream is live; freesrc=0 leaves it open.
    let ptr = unsafe { sys::IMG_Load_RW(src.as_ptr(), c_bool(false)) };
    check_ptr(ptr).map(Surface::new)
}

/// Load from a stream and let SDL_image close it.
pub fn load_rw_owned(src: RWops<'_>) -> Result<Surface> {
    // SAFETY: ownership moves to SDL_image, which closes the stream on every path.
    let ptr = unsafe { sys::IMG_Load_RW(src.into_raw(), c_bool(true)) };
    check_ptr(ptr).map(Surface::new)
}

/// Load with a type hint (`"PNG"`, `"TGA"`, ...). Needed for formats that cannot be
/// sniffed, such as TGA.
pub fn load_typed_rw(src: &mut RWops<'_>, type_hint: &str) -> Result<Surface> {
    let hint = c_string(type_hint)?;
    // SAFETY: stream and hint are valid for the call; freesrc=0.
    let ptr = unsafe { sys::IMG_LoadTyped_RW(src.as_ptr(), c_bool(false), hint.as_ptr()) };
    check_ptr(ptr).map(Surface::new)
}

/// Typed load that hands the stream to SDL_image.
pub fn load_typed_rw_owned(src: RWops<'_>, type_hint: &str) -> Result<Surface> {
    // Marshal first so a bad hint still closes the stream through Drop.
    let hint = c_string(type_hint)?;
    // SAFETY: ownership moves to SDL_image; hint is valid for the call.
    let ptr = unsafe { sys::IMG_LoadTyped_RW(src.into_raw(), c_bool(true), hint.as_ptr()) };
    check_ptr(ptr).map(Surface::new)
}

/// Typed load using a known format tag.
pub fn load_format_rw(src: &mut RWops<'_>, format: ImageFormat) -> Result<Surface> {
    load_typed_rw(src, format.type_hint())
}
