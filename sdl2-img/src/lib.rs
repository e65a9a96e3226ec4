//! Safe Rust bindings for [SDL2_image](https://github.com/libsdl-org/SDL_image).
//!
//! The crate adds no image logic of its own. Each function forwards to a single
//! SDL2_image entry point, turns the native failure sentinel (a null handle or a
//! non-zero return code) into [`Error`], and copies SDL's error text into a Rust
//! string:
//! - [`init`] returns an [`ImageContext`] guard that shuts the library down on drop.
//! - [`load`], [`load_rw`] and friends decode into a [`Surface`]; the `texture`
//!   loaders produce a [`Texture`] for a caller-supplied [`Renderer`].
//! - [`detect`] holds one signature probe per format, plus [`detect::detect`].
//! - [`save_png`] and [`save_jpg`] write surfaces to files or [`RWops`] streams.
//!
//! Surfaces and textures are plain handles: they are never freed here. Release
//! them with SDL's own calls through [`sys`].
//!
//! # Threads
//! `IMG_Init`/`IMG_Quit` touch process-wide state and must be serialized by the
//! caller. Independent loads and saves on independent streams may run
//! concurrently. SDL keeps only the most recent error message, so concurrent
//! failures may race on which message ends up in which [`Error`] (see
//! [`get_error`]). The handles themselves are not `Send`.

/// Low-level bindings to SDL2_image. Most users should favor the safe wrappers
/// re-exported from this crate.
pub use sdl2_img_sys as sys;

mod animation;
mod context;
pub mod detect;
mod error;
mod ffi;
mod flags;
mod format;
mod load;
mod rwops;
mod save;
mod texture;
mod types;

pub use animation::{
    Animation, Frame, load_animation, load_animation_rw, load_animation_rw_owned,
    load_animation_typed_rw,
};
pub use context::{ImageContext, compiled_version, init, linked_version, quit};
pub use error::{Error, Result, get_error};
pub use flags::InitFlags;
pub use format::ImageFormat;
pub use load::{
    load, load_format_rw, load_rw, load_rw_owned, load_typed_rw, load_typed_rw_owned,
};
pub use rwops::RWops;
pub use save::{save_jpg, save_jpg_rw, save_jpg_rw_owned, save_png, save_png_rw, save_png_rw_owned};
pub use texture::{
    load_texture, load_texture_rw, load_texture_rw_owned, load_texture_typed_rw,
    load_texture_typed_rw_owned,
};
pub use types::{PixelFormat, Renderer, Surface, Texture, TextureInfo, Version};
