#![allow(dead_code)]

use std::io::Seek;
use std::sync::{Mutex, MutexGuard};

use sdl2_img::{RWops, Surface, sys};

static NATIVE: Mutex<()> = Mutex::new(());

/// SDL_image init/quit is process-wide; tests in one binary take turns.
pub fn serial() -> MutexGuard<'static, ()> {
    NATIVE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Owns a blank RGBA surface created through SDL core, freed on drop.
pub struct Blank {
    surface: Surface,
}

impl Blank {
    pub fn new(width: i32, height: i32) -> Self {
        let ptr = unsafe {
            sys::SDL_CreateRGBSurfaceWithFormat(0, width, height, 32, sys::SDL_PIXELFORMAT_RGBA8888)
        };
        let surface = unsafe { Surface::from_raw(ptr) }.expect("SDL_CreateRGBSurfaceWithFormat failed");
        Self { surface }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}

impl Drop for Blank {
    fn drop(&mut self) {
        unsafe { sys::SDL_FreeSurface(self.surface.as_ptr()) }
    }
}

pub fn free(surface: Surface) {
    unsafe { sys::SDL_FreeSurface(surface.into_raw()) }
}

/// Encode a blank image into PNG bytes entirely in memory.
pub fn png_bytes(width: i32, height: i32) -> Vec<u8> {
    let blank = Blank::new(width, height);
    let mut buf = vec![0u8; 1 << 16];
    let written = {
        let mut dst = RWops::from_bytes_mut(&mut buf).expect("memory stream");
        sdl2_img::save_png_rw(blank.surface(), &mut dst).expect("save png to memory");
        dst.stream_position().expect("tell")
    };
    buf.truncate(written as usize);
    buf
}
