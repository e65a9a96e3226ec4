//! Loaders that go straight to a renderer texture.

use crate::error::{Result, check_ptr};
use crate::ffi::{c_bool, c_path, c_string};
use crate::rwops::RWops;
use crate::sys;
use crate::types::{Renderer, Texture};
use std::path::Path;

pub fn load_texture(renderer: &Renderer, path: impl AsRef<Path>) -> Result<Texture> {
    let file = c_path(path.as_ref())?;
    // SAFETY: renderer is live per Renderer::from_raw; file is a valid C string.
    let ptr = unsafe { sys::IMG_LoadTexture(renderer.as_ptr(), file.as_ptr()) };
    check_ptr(ptr).map(Texture::new)
}

pub fn load_texture_rw(renderer: &Renderer, src: &mut RWops<'_>) -> Result<Texture> {
    // SAFETY: renderer and stream are live; freesrc=0.
    let ptr = unsafe { sys::IMG_LoadTexture_RW(renderer.as_ptr(), src.as_ptr(), c_bool(false)) };
    check_ptr(ptr).map(Texture::new)
}

pub fn load_texture_rw_owned(renderer: &Renderer, src: RWops<'_>) -> Result<Texture> {
    // SAFETY: ownership of the stream moves to SDL_image.
    let ptr = unsafe { sys::IMG_LoadTexture_RW(renderer.as_ptr(), src.into_raw(), c_bool(true)) };
    check_ptr(ptr).map(Texture::new)
}

pub fn load_texture_typed_rw(
    renderer: &Renderer,
    src: &mut RWops<'_>,
    type_hint: &str,
) -> Result<Texture> {
    let hint = c_string(type_hint)?;
    // SAFETY: renderer, stream and hint are valid for the call; freesrc=0.
    let ptr = unsafe {
        sys::IMG_LoadTextureTyped_RW(renderer.as_ptr(), src.as_ptr(), c_bool(false), hint.as_ptr())
    };
    check_ptr(ptr).map(Texture::new)
}

pub fn load_texture_typed_rw_owned(
    renderer: &Renderer,
    src: RWops<'_>,
    type_hint: &str,
) -> Result<Texture> {
    let hint = c_string(type_hint)?;
    // SAFETY: ownership of the stream moves to SDL_image; hint outlives the call.
    let ptr = unsafe {
        sys::IMG_LoadTextureTyped_RW(renderer.as_ptr(), src.into_raw(), c_bool(true), hint.as_ptr())
    };
    check_ptr(ptr).map(Texture::new)
}
