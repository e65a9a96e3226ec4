use std::path::Path;

use anyhow::{Context, Result, bail};
use sdl2_img::{RWops, Surface, sys};

use crate::cli::{ConvertArgs, InfoArgs, SaveFormat};

/// Frees the loaded surface however the command exits.
struct Loaded(Surface);

impl Loaded {
    fn surface(&self) -> &Surface {
        &self.0
    }
}

impl Drop for Loaded {
    fn drop(&mut self) {
        // SAFETY: the surface came from an SDL_image loader and is freed once.
        unsafe { sys::SDL_FreeSurface(self.0.as_ptr()) }
    }
}

fn load_input(path: &Path, type_hint: Option<&str>) -> Result<Loaded> {
    let surface = match type_hint {
        Some(hint) => {
            let src = RWops::from_file(path, "rb")
                .with_context(|| format!("Failed to open {}", path.display()))?;
            sdl2_img::load_typed_rw_owned(src, hint)
        }
        None => sdl2_img::load(path),
    }
    .with_context(|| format!("Failed to load {}", path.display()))?;
    log::info!(
        "Loaded {} ({}x{})",
        path.display(),
        surface.width(),
        surface.height()
    );
    Ok(Loaded(surface))
}

pub fn run_info(args: &InfoArgs) -> Result<()> {
    let loaded = load_input(&args.input, args.type_hint.as_deref())?;
    let surface = loaded.surface();
    println!(
        "{}: {}x{} (pitch {})",
        args.input.display(),
        surface.width(),
        surface.height(),
        surface.pitch()
    );
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    let format = match args.format {
        Some(fmt) => fmt,
        None => format_from_extension(&args.output)?,
    };
    let loaded = load_input(&args.input, None)?;

    match format {
        SaveFormat::Png => sdl2_img::save_png(loaded.surface(), &args.output),
        SaveFormat::Jpg => sdl2_img::save_jpg(loaded.surface(), &args.output, args.quality),
    }
    .with_context(|| format!("Failed to write output {}", args.output.display()))?;

    println!("Wrote {}", args.output.display());
    Ok(())
}

fn format_from_extension(path: &Path) -> Result<SaveFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => Ok(SaveFormat::Png),
        Some("jpg" | "jpeg") => Ok(SaveFormat::Jpg),
        _ => bail!(
            "Cannot infer output format from {}; pass --format png|jpg",
            path.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_picks_format() {
        assert_eq!(
            format_from_extension(Path::new("a/b.PNG")).unwrap(),
            SaveFormat::Png
        );
        assert_eq!(
            format_from_extension(Path::new("b.jpeg")).unwrap(),
            SaveFormat::Jpg
        );
    }

    #[test]
    fn unknown_extension_asks_for_format() {
        let err = format_from_extension(Path::new("out.bmp")).unwrap_err();
        assert!(err.to_string().contains("--format"));
        assert!(format_from_extension(Path::new("noext")).is_err());
    }

    #[test]
    fn convert_round_trips_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("src.png");
        let jpg = dir.path().join("dst.jpg");

        // SAFETY: freshly created surface handed straight to the guard.
        let ptr = unsafe {
            sys::SDL_CreateRGBSurfaceWithFormat(0, 12, 7, 32, sys::SDL_PIXELFORMAT_RGBA8888)
        };
        let blank = Loaded(unsafe { Surface::from_raw(ptr) }.expect("blank surface"));
        sdl2_img::save_png(blank.surface(), &png).unwrap();

        run_convert(&ConvertArgs {
            input: png.clone(),
            output: jpg.clone(),
            format: None,
            quality: 80,
        })
        .unwrap();

        assert_eq!(
            crate::detect::detect_file(&jpg).unwrap(),
            Some(sdl2_img::ImageFormat::Jpg)
        );
        let reloaded = load_input(&jpg, Some("JPG")).unwrap();
        assert_eq!(
            (reloaded.surface().width(), reloaded.surface().height()),
            (12, 7)
        );
    }
}
