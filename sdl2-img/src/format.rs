use crate::detect;
use crate::error::Error;
use crate::rwops::RWops;
use std::fmt;
use std::str::FromStr;

/// Format tags SDL_image can sniff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Ico,
    Cur,
    Bmp,
    Gif,
    Jpg,
    Lbm,
    Pcx,
    Png,
    Pnm,
    Svg,
    Tif,
    Xcf,
    Xpm,
    Xv,
    Webp,
    Qoi,
    Avif,
    Jxl,
}

impl ImageFormat {
    /// Probe order used by [`detect::detect`](crate::detect::detect).
    pub const ALL: [ImageFormat; 18] = [
        ImageFormat::Ico,
        ImageFormat::Cur,
        ImageFormat::Bmp,
        ImageFormat::Gif,
        ImageFormat::Jpg,
        ImageFormat::Lbm,
        ImageFormat::Pcx,
        ImageFormat::Png,
        ImageFormat::Pnm,
        ImageFormat::Svg,
        ImageFormat::Tif,
        ImageFormat::Xcf,
        ImageFormat::Xpm,
        ImageFormat::Xv,
        ImageFormat::Webp,
        ImageFormat::Qoi,
        ImageFormat::Avif,
        ImageFormat::Jxl,
    ];

    /// The type string `IMG_LoadTyped_RW` understands for this format.
    pub fn type_hint(self) -> &'static str {
        match self {
            ImageFormat::Ico => "ICO",
            ImageFormat::Cur => "CUR",
            ImageFormat::Bmp => "BMP",
            ImageFormat::Gif => "GIF",
            ImageFormat::Jpg => "JPG",
            ImageFormat::Lbm => "LBM",
            ImageFormat::Pcx => "PCX",
            ImageFormat::Png => "PNG",
            ImageFormat::Pnm => "PNM",
            ImageFormat::Svg => "SVG",
            ImageFormat::Tif => "TIF",
            ImageFormat::Xcf => "XCF",
            ImageFormat::Xpm => "XPM",
            ImageFormat::Xv => "XV",
            ImageFormat::Webp => "WEBP",
            ImageFormat::Qoi => "QOI",
            ImageFormat::Avif => "AVIF",
            ImageFormat::Jxl => "JXL",
        }
    }

    /// Run this format's signature probe on `src`.
    pub fn probe(self, src: &mut RWops<'_>) -> bool {
        match self {
            ImageFormat::Ico => detect::is_ico(src),
            ImageFormat::Cur => detect::is_cur(src),
            ImageFormat::Bmp => detect::is_bmp(src),
            ImageFormat::Gif => detect::is_gif(src),
            ImageFormat::Jpg => detect::is_jpg(src),
            ImageFormat::Lbm => detect::is_lbm(src),
            ImageFormat::Pcx => detect::is_pcx(src),
            ImageFormat::Png => detect::is_png(src),
            ImageFormat::Pnm => detect::is_pnm(src),
            ImageFormat::Svg => detect::is_svg(src),
            ImageFormat::Tif => detect::is_tif(src),
            ImageFormat::Xcf => detect::is_xcf(src),
            ImageFormat::Xpm => detect::is_xpm(src),
            ImageFormat::Xv => detect::is_xv(src),
            ImageFormat::Webp => detect::is_webp(src),
            ImageFormat::Qoi => detect::is_qoi(src),
            ImageFormat::Avif => detect::is_avif(src),
            ImageFormat::Jxl => detect::is_jxl(src),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_hint())
    }
}

impl FromStr for ImageFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().trim_start_matches('.').to_ascii_uppercase();
        let alias = match upper.as_str() {
            "JPEG" => "JPG",
            "TIFF" => "TIF",
            "PBM" | "PGM" | "PPM" => "PNM",
            other => other,
        };
        ImageFormat::ALL
            .into_iter()
            .find(|fmt| fmt.type_hint() == alias)
            .ok_or_else(|| Error::invalid_arg(format!("unknown image format: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_parses_back() {
        for fmt in ImageFormat::ALL {
            assert_eq!(fmt.type_hint().parse::<ImageFormat>().unwrap(), fmt);
        }
    }

    #[test]
    fn parsing_ignores_case_and_leading_dot() {
        assert_eq!("png".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert_eq!(".WebP".parse::<ImageFormat>().unwrap(), ImageFormat::Webp);
    }

    #[test]
    fn common_aliases_are_accepted() {
        assert_eq!("jpeg".parse::<ImageFormat>().unwrap(), ImageFormat::Jpg);
        assert_eq!("tiff".parse::<ImageFormat>().unwrap(), ImageFormat::Tif);
        assert_eq!("ppm".parse::<ImageFormat>().unwrap(), ImageFormat::Pnm);
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let err = "heic".parse::<ImageFormat>().unwrap_err();
        assert_eq!(err.to_string(), "unknown image format: heic");
    }

    #[test]
    fn display_is_type_hint() {
        assert_eq!(ImageFormat::Xv.to_string(), "XV");
    }
}
