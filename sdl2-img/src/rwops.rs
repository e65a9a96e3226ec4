use crate::error::{Error, Result, check_ptr};
use crate::ffi::{c_path, c_string};
use crate::sys;
use std::ffi::{c_int, c_void};
use std::io::{self, Seek, SeekFrom};
use std::marker::PhantomData;
use std::path::Path;
use std::ptr::NonNull;

/// Seekable byte stream (`SDL_RWops`) handed to SDL_image loaders, probes and savers.
///
/// The stream is closed with `SDL_RWclose` when dropped. Operations that take the
/// stream by value (`*_owned`) pass ownership to SDL_image instead, which closes it
/// whether or not the call succeeds.
///
/// Memory-backed streams borrow their buffer for `'a`.
#[derive(Debug)]
pub struct RWops<'a> {
    raw: NonNull<sys::SDL_RWops>,
    _marker: PhantomData<&'a mut [u8]>,
}

impl<'a> RWops<'a> {
    /// Read-only stream over `data`.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self> {
        let len = mem_len(data.len())?;
        // SAFETY: SDL only reads `len` bytes from `data`, which outlives 'a.
        let ptr = unsafe { sys::SDL_RWFromConstMem(data.as_ptr() as *const c_void, len) };
        check_ptr(ptr).map(Self::new)
    }

    /// Read/write stream over `data`. Writes past the end of the buffer fail.
    pub fn from_bytes_mut(data: &'a mut [u8]) -> Result<Self> {
        let len = mem_len(data.len())?;
        // SAFETY: SDL reads and writes at most `len` bytes of `data`, borrowed for 'a.
        let ptr = unsafe { sys::SDL_RWFromMem(data.as_mut_ptr() as *mut c_void, len) };
        check_ptr(ptr).map(Self::new)
    }

    /// Adopt a stream created elsewhere.
    ///
    /// # Safety
    /// `ptr` must be null or a live `SDL_RWops` that nobody else will close, and any
    /// memory it reads from must stay valid for `'a`.
    pub unsafe fn from_raw(ptr: *mut sys::SDL_RWops) -> Option<Self> {
        NonNull::new(ptr).map(Self::new)
    }

    fn new(raw: NonNull<sys::SDL_RWops>) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    pub fn as_ptr(&self) -> *mut sys::SDL_RWops {
        self.raw.as_ptr()
    }

    /// Release the stream without closing it; the receiver becomes responsible.
    pub(crate) fn into_raw(self) -> *mut sys::SDL_RWops {
        let ptr = self.raw.as_ptr();
        std::mem::forget(self);
        ptr
    }

    /// Total size in bytes, when the stream knows it.
    pub fn size(&mut self) -> Result<u64> {
        // SAFETY: stream is live for the lifetime of self.
        let size = unsafe { sys::SDL_RWsize(self.raw.as_ptr()) };
        u64::try_from(size).map_err(|_| Error::last())
    }
}

impl RWops<'static> {
    /// Open `path` with an `fopen`-style `mode` (`"rb"`, `"wb"`, ...).
    pub fn from_file(path: impl AsRef<Path>, mode: &str) -> Result<Self> {
        let file = c_path(path.as_ref())?;
        let mode = c_string(mode)?;
        // SAFETY: both strings are valid NUL-terminated buffers for the call.
        let ptr = unsafe { sys::SDL_RWFromFile(file.as_ptr(), mode.as_ptr()) };
        check_ptr(ptr).map(Self::new)
    }
}

impl Seek for RWops<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (offset, whence) = match pos {
            SeekFrom::Start(n) => (
                i64::try_from(n)
                    .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "seek offset overflow"))?,
                sys::RW_SEEK_SET,
            ),
            SeekFrom::Current(n) => (n, sys::RW_SEEK_CUR),
            SeekFrom::End(n) => (n, sys::RW_SEEK_END),
        };
        // SAFETY: stream is live for the lifetime of self.
        let at = unsafe { sys::SDL_RWseek(self.raw.as_ptr(), offset, whence as c_int) };
        u64::try_from(at).map_err(|_| io::Error::other(Error::last()))
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        // SAFETY: stream is live for the lifetime of self.
        let at = unsafe { sys::SDL_RWtell(self.raw.as_ptr()) };
        u64::try_from(at).map_err(|_| io::Error::other(Error::last()))
    }
}

impl Drop for RWops<'_> {
    fn drop(&mut self) {
        // SAFETY: self still owns the stream; into_raw forgets self before handing it off.
        let rc = unsafe { sys::SDL_RWclose(self.raw.as_ptr()) };
        if rc != 0 {
            log::debug!("SDL_RWclose failed: {}", crate::get_error());
        }
    }
}

/// SDL memory streams are sized with a C `int`.
fn mem_len(len: usize) -> Result<c_int> {
    c_int::try_from(len)
        .map_err(|_| Error::invalid_arg(format!("buffer of {} bytes is too large for an SDL stream", len)))
}
