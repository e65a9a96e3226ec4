//! PNG and JPEG writers.
//!
//! Every failure maps to [`Error::OperationFailed`](crate::Error::OperationFailed)
//! with SDL's message; SDL does not say whether the disk was full, the pixel format
//! unsupported or the surface invalid.

use crate::error::{Result, check_code};
use crate::ffi::{c_bool, c_path};
use crate::rwops::RWops;
use crate::sys;
use crate::types::Surface;
use std::path::Path;

pub fn save_png(surface: &Surface, path: impl AsRef<Path>) -> Result<()> {
    let file = c_path(path.as_ref())?;
    // SAFETY: surface is live; file is a valid C string.
    let rc = unsafe { sys::IMG_SavePNG(surface.as_ptr(), file.as_ptr()) };
    check_code(rc)
}

pub fn save_png_rw(surface: &Surface, dst: &mut RWops<'_>) -> Result<()> {
    // SAFETY: surface and stream are live; freedst=0.
    let rc = unsafe { sys::IMG_SavePNG_RW(surface.as_ptr(), dst.as_ptr(), c_bool(false)) };
    check_code(rc)
}

pub fn save_png_rw_owned(surface: &Surface, dst: RWops<'_>) -> Result<()> {
    // SAFETY: ownership of the stream moves to SDL_image.
    let rc = unsafe { sys::IMG_SavePNG_RW(surface.as_ptr(), dst.into_raw(), c_bool(true)) };
    check_code(rc)
}

/// `quality` runs 0..=100; SDL_image clamps values outside that range.
pub fn save_jpg(surface: &Surface, path: impl AsRef<Path>, quality: i32) -> Result<()> {
    let file = c_path(path.as_ref())?;
    // SAFETY: surface is live; file is a valid C string.
    let rc = unsafe { sys::IMG_SaveJPG(surface.as_ptr(), file.as_ptr(), quality) };
    check_code(rc)
}

pub fn save_jpg_rw(surface: &Surface, dst: &mut RWops<'_>, quality: i32) -> Result<()> {
    // SAFETY: surface and stream are live; freedst=0.
    let rc =
        unsafe { sys::IMG_SaveJPG_RW(surface.as_ptr(), dst.as_ptr(), c_bool(false), quality) };
    check_code(rc)
}

pub fn save_jpg_rw_owned(surface: &Surface, dst: RWops<'_>, quality: i32) -> Result<()> {
    // SAFETY: ownership of the stream moves to SDL_image.
    let rc =
        unsafe { sys::IMG_SaveJPG_RW(surface.as_ptr(), dst.into_raw(), c_bool(true), quality) };
    check_code(rc)
}
