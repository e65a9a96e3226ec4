//! Format sniffing.
//!
//! Each probe hands the stream straight to the matching `IMG_is*` function. The
//! native probes seek back to where they started, so a stream can be probed any
//! number of times and then passed to a loader.

use crate::format::ImageFormat;
use crate::rwops::RWops;
use crate::sys;

macro_rules! probes {
    ($($name:ident => $native:ident, $tag:literal;)*) => {
        $(
            #[doc = concat!("Probe `src` for the ", $tag, " signature.")]
            pub fn $name(src: &mut RWops<'_>) -> bool {
                // SAFETY: the stream is live and borrowed mutably for the call.
                unsafe { sys::$native(src.as_ptr()) == 1 }
            }
        )*
    };
}

probes! {
    is_ico => IMG_isICO, "ICO";
    is_cur => IMG_isCUR, "CUR";
    is_bmp => IMG_isBMP, "BMP";
    is_gif => IMG_isGIF, "GIF";
    is_jpg => IMG_isJPG, "JPG";
    is_lbm => IMG_isLBM, "LBM";
    is_pcx => IMG_isPCX, "PCX";
    is_png => IMG_isPNG, "PNG";
    is_pnm => IMG_isPNM, "PNM";
    is_svg => IMG_isSVG, "SVG";
    is_tif => IMG_isTIF, "TIF";
    is_xcf => IMG_isXCF, "XCF";
    is_xpm => IMG_isXPM, "XPM";
    is_xv => IMG_isXV, "XV";
    is_webp => IMG_isWEBP, "WEBP";
    is_qoi => IMG_isQOI, "QOI";
    is_avif => IMG_isAVIF, "AVIF";
    is_jxl => IMG_isJXL, "JXL";
}

/// First format in [`ImageFormat::ALL`] whose probe matches.
pub fn detect(src: &mut RWops<'_>) -> Option<ImageFormat> {
    ImageFormat::ALL.into_iter().find(|fmt| fmt.probe(src))
}
