use crate::sys;
use bitflags::bitflags;

bitflags! {
    /// Optional format backends to bring up with [`init`](crate::init).
    ///
    /// Formats not listed here (BMP, GIF, PNM, QOI, ...) are always available and need
    /// no initialization. Unknown bits are kept, so a request for a backend this build
    /// does not know about reaches `IMG_Init` and fails there.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InitFlags: i32 {
        const JPG = sys::IMG_INIT_JPG as i32;
        const PNG = sys::IMG_INIT_PNG as i32;
        const TIF = sys::IMG_INIT_TIF as i32;
        const WEBP = sys::IMG_INIT_WEBP as i32;
        const JXL = sys::IMG_INIT_JXL as i32;
        const AVIF = sys::IMG_INIT_AVIF as i32;
    }
}

impl Default for InitFlags {
    /// The four classic backends: JPG, PNG, TIF and WEBP.
    fn default() -> Self {
        InitFlags::JPG | InitFlags::PNG | InitFlags::TIF | InitFlags::WEBP
    }
}
