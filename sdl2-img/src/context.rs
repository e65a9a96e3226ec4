use crate::error::{Error, Result};
use crate::flags::InitFlags;
use crate::sys;
use crate::types::Version;
use std::marker::PhantomData;

/// Proof that `IMG_Init` succeeded for a set of backends.
///
/// Only [`init`] creates one. Dropping it (or calling [`ImageContext::shutdown`])
/// runs `IMG_Quit`. SDL_image's initialization state is process-wide and not
/// thread-safe, so the guard is neither `Send` nor `Sync`; callers that hold
/// several guards must remember that the first one dropped shuts everything down.
#[derive(Debug)]
pub struct ImageContext {
    flags: InitFlags,
    _not_send: PhantomData<*const ()>,
}

impl ImageContext {
    /// Backends this guard was created for.
    pub fn flags(&self) -> InitFlags {
        self.flags
    }

    /// Shut SDL_image down now instead of at scope exit.
    pub fn shutdown(self) {
        drop(self)
    }
}

impl Drop for ImageContext {
    fn drop(&mut self) {
        log::debug!("shutting down SDL_image (flags {:?})", self.flags);
        quit();
    }
}

/// Initialize the requested backends.
///
/// Succeeds only if every requested bit comes back from `IMG_Init`. On any
/// shortfall the library is shut down again with `IMG_Quit` and
/// [`Error::InitializationFailed`] is returned; there is no partial success.
pub fn init(flags: InitFlags) -> Result<ImageContext> {
    let requested = flags.bits();
    // SAFETY: plain integer in, integer out.
    let initted = unsafe { sys::IMG_Init(requested) };
    if initted & requested != requested {
        log::debug!(
            "IMG_Init returned {:#x} for requested {:#x}: {}",
            initted,
            requested,
            crate::get_error()
        );
        quit();
        return Err(Error::InitializationFailed);
    }
    Ok(ImageContext {
        flags,
        _not_send: PhantomData,
    })
}

/// Forward to `IMG_Quit`. Prefer dropping the [`ImageContext`].
pub fn quit() {
    // SAFETY: IMG_Quit is safe to call in any state.
    unsafe { sys::IMG_Quit() }
}

/// Version of the SDL2_image library linked at runtime.
pub fn linked_version() -> Version {
    // SAFETY: returns a pointer to a static struct inside the library.
    let ptr = unsafe { sys::IMG_Linked_Version() };
    if ptr.is_null() {
        return Version::default();
    }
    // SAFETY: non-null static data; copied out immediately.
    Version::from_sys(unsafe { &*ptr })
}

/// Version of the `SDL_image.h` these bindings were built against.
pub fn compiled_version() -> Version {
    Version::new(
        sys::SDL_IMAGE_MAJOR_VERSION as u8,
        sys::SDL_IMAGE_MINOR_VERSION as u8,
        sys::SDL_IMAGE_PATCHLEVEL as u8,
    )
}
