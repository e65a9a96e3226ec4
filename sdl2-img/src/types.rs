use crate::error::{Result, check_code};
use crate::sys;
use std::fmt;
use std::ptr::NonNull;

/// SDL pixel format enum value (`SDL_PIXELFORMAT_*`).
pub type PixelFormat = u32;

/// Decoded pixel buffer handle returned by SDL_image.
///
/// The handle does not own the surface. Whoever receives it from a loader is the
/// owner under SDL's rules and releases it with `sys::SDL_FreeSurface` (see
/// [`Surface::into_raw`]). Accessors read the native struct, so the handle must
/// not outlive that release.
#[derive(Debug)]
pub struct Surface {
    raw: NonNull<sys::SDL_Surface>,
}

impl Surface {
    pub(crate) fn new(raw: NonNull<sys::SDL_Surface>) -> Self {
        Self { raw }
    }

    /// Wrap a surface created elsewhere (for example with `SDL_CreateRGBSurfaceWithFormat`).
    ///
    /// # Safety
    /// `ptr` must be null or point to a live `SDL_Surface` that stays valid for as
    /// long as the returned handle is used.
    pub unsafe fn from_raw(ptr: *mut sys::SDL_Surface) -> Option<Self> {
        NonNull::new(ptr).map(Self::new)
    }

    pub fn as_ptr(&self) -> *mut sys::SDL_Surface {
        self.raw.as_ptr()
    }

    /// Give the pointer back to the caller, typically to hand it to `SDL_FreeSurface`.
    pub fn into_raw(self) -> *mut sys::SDL_Surface {
        self.raw.as_ptr()
    }

    fn inner(&self) -> &sys::SDL_Surface {
        // SAFETY: the handle is only constructed from a live surface.
        unsafe { self.raw.as_ref() }
    }

    pub fn width(&self) -> u32 {
        clamp_dim(self.inner().w)
    }

    pub fn height(&self) -> u32 {
        clamp_dim(self.inner().h)
    }

    /// Bytes per row, including padding.
    pub fn pitch(&self) -> u32 {
        clamp_dim(self.inner().pitch)
    }
}

/// Renderer supplied by the caller for texture loads. Never destroyed here.
#[derive(Debug)]
pub struct Renderer {
    raw: NonNull<sys::SDL_Renderer>,
}

impl Renderer {
    /// # Safety
    /// `ptr` must be null or point to a live `SDL_Renderer` that outlives every
    /// texture load made through the returned handle.
    pub unsafe fn from_raw(ptr: *mut sys::SDL_Renderer) -> Option<Self> {
        NonNull::new(ptr).map(|raw| Self { raw })
    }

    pub fn as_ptr(&self) -> *mut sys::SDL_Renderer {
        self.raw.as_ptr()
    }
}

/// GPU/renderer texture created by SDL_image. Not owned: the renderer that made it
/// destroys it, or the caller does with `sys::SDL_DestroyTexture`.
#[derive(Debug)]
pub struct Texture {
    raw: NonNull<sys::SDL_Texture>,
}

/// Attributes reported by `SDL_QueryTexture`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub format: PixelFormat,
    pub access: i32,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    pub(crate) fn new(raw: NonNull<sys::SDL_Texture>) -> Self {
        Self { raw }
    }

    pub fn as_ptr(&self) -> *mut sys::SDL_Texture {
        self.raw.as_ptr()
    }

    pub fn into_raw(self) -> *mut sys::SDL_Texture {
        self.raw.as_ptr()
    }

    pub fn query(&self) -> Result<TextureInfo> {
        let mut format = 0u32;
        let mut access = 0;
        let mut w = 0;
        let mut h = 0;
        // SAFETY: texture is live; out-params point to locals.
        let rc = unsafe {
            sys::SDL_QueryTexture(self.raw.as_ptr(), &mut format, &mut access, &mut w, &mut h)
        };
        check_code(rc)?;
        Ok(TextureInfo {
            format,
            access,
            width: clamp_dim(w),
            height: clamp_dim(h),
        })
    }
}

/// SDL2_image version triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl Version {
    pub const fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub(crate) fn from_sys(ver: &sys::SDL_version) -> Self {
        Self::new(ver.major, ver.minor, ver.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// SDL reports sizes as `int`; negative values never describe a real image.
pub(crate) fn clamp_dim(v: i32) -> u32 {
    u32::try_from(v).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_displays_dotted() {
        assert_eq!(Version::new(2, 8, 2).to_string(), "2.8.2");
    }

    #[test]
    fn versions_order_by_component() {
        assert!(Version::new(2, 6, 0) > Version::new(2, 0, 5));
        assert!(Version::new(2, 8, 0) < Version::new(2, 8, 1));
        assert!(Version::new(3, 0, 0) > Version::new(2, 99, 99));
    }

    #[test]
    fn negative_dimensions_clamp_to_zero() {
        assert_eq!(clamp_dim(-4), 0);
        assert_eq!(clamp_dim(640), 640);
    }
}
