use crate::error::{Result, check_ptr};
use crate::ffi::{c_bool, c_path, c_string};
use crate::rwops::RWops;
use crate::sys;
use crate::types::clamp_dim;
use std::marker::PhantomData;
use std::path::Path;
use std::ptr::NonNull;

/// Decoded multi-frame image (animated GIF or WEBP).
///
/// SDL_image hands the whole `IMG_Animation` to the caller, frames included, so
/// this type owns it and frees it with `IMG_FreeAnimation` on drop.
#[derive(Debug)]
pub struct Animation {
    raw: NonNull<sys::IMG_Animation>,
}

/// One frame borrowed from an [`Animation`].
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    surface: NonNull<sys::SDL_Surface>,
    delay_ms: u32,
    _marker: PhantomData<&'a Animation>,
}

impl Animation {
    fn new(raw: NonNull<sys::IMG_Animation>) -> Self {
        Self { raw }
    }

    fn inner(&self) -> &sys::IMG_Animation {
        // SAFETY: owned and live until drop.
        unsafe { self.raw.as_ref() }
    }

    pub fn width(&self) -> u32 {
        clamp_dim(self.inner().w)
    }

    pub fn height(&self) -> u32 {
        clamp_dim(self.inner().h)
    }

    pub fn len(&self) -> usize {
        clamp_dim(self.inner().count) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn frame(&self, index: usize) -> Option<Frame<'_>> {
        if index >= self.len() {
            return None;
        }
        let anim = self.inner();
        if anim.frames.is_null() {
            return None;
        }
        // SAFETY: index < count; frames holds `count` surface pointers.
        let surface = NonNull::new(unsafe { *anim.frames.add(index) })?;
        let delay = if anim.delays.is_null() {
            0
        } else {
            // SAFETY: delays holds `count` entries.
            unsafe { *anim.delays.add(index) }
        };
        Some(Frame {
            surface,
            delay_ms: clamp_dim(delay),
            _marker: PhantomData,
        })
    }

    pub fn frames(&self) -> impl Iterator<Item = Frame<'_>> + '_ {
        (0..self.len()).filter_map(move |i| self.frame(i))
    }
}

impl Drop for Animation {
    fn drop(&mut self) {
        // SAFETY: the animation was returned by an IMG_LoadAnimation* call and is freed once.
        unsafe { sys::IMG_FreeAnimation(self.raw.as_ptr()) }
    }
}

impl Frame<'_> {
    fn inner(&self) -> &sys::SDL_Surface {
        // SAFETY: the owning animation outlives this borrow.
        unsafe { self.surface.as_ref() }
    }

    pub fn width(&self) -> u32 {
        clamp_dim(self.inner().w)
    }

    pub fn height(&self) -> u32 {
        clamp_dim(self.inner().h)
    }

    /// Display time in milliseconds.
    pub fn delay(&self) -> u32 {
        self.delay_ms
    }

    /// Raw surface, still owned by the animation.
    pub fn as_ptr(&self) -> *mut sys::SDL_Surface {
        self.surface.as_ptr()
    }
}

pub fn load_animation(path: impl AsRef<Path>) -> Result<Animation> {
    let file = c_path(path.as_ref())?;
    // SAFETY: file is a valid C string for the call.
    let ptr = unsafe { sys::IMG_LoadAnimation(file.as_ptr()) };
    check_ptr(ptr).map(Animation::new)
}

pub fn load_animation_rw(src: &mut RWops<'_>) -> Result<Animation> {
    // SAFETY: stream is live; freesrc=0.
    let ptr = unsafe { sys::IMG_LoadAnimation_RW(src.as_ptr(), c_bool(false)) };
    check_ptr(ptr).map(Animation::new)
}

pub fn load_animation_rw_owned(src: RWops<'_>) -> Result<Animation> {
    // SAFETY: ownership of the stream moves to SDL_image.
    let ptr = unsafe { sys::IMG_LoadAnimation_RW(src.into_raw(), c_bool(true)) };
    check_ptr(ptr).map(Animation::new)
}

pub fn load_animation_typed_rw(src: &mut RWops<'_>, type_hint: &str) -> Result<Animation> {
    let hint = c_string(type_hint)?;
    // SAFETY: stream and hint are valid for the call; freesrc=0.
    let ptr =
        unsafe { sys::IMG_LoadAnimationTyped_RW(src.as_ptr(), c_bool(false), hint.as_ptr()) };
    check_ptr(ptr).map(Animation::new)
}
