//! Raw FFI bindings to [SDL2_image](https://github.com/libsdl-org/SDL_image).
//!
//! The checked-in declarations in `bindings.rs` track SDL2_image 2.8 and only the
//! slice of SDL2 core that the image API touches (RWops, surfaces, renderers, the
//! error slot). Enable the `bindgen` feature to regenerate them from the headers
//! installed on the build machine.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

#[cfg(feature = "bindgen")]
include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

#[cfg(not(feature = "bindgen"))]
mod bindings;
#[cfg(not(feature = "bindgen"))]
pub use bindings::*;

#[cfg(test)]
#[path = "../build/link.rs"]
mod link;
