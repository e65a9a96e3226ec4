use std::path::Path;

use anyhow::{Context, Result};
use sdl2_img::{ImageFormat, RWops};

pub fn run_detect(args: &crate::cli::DetectArgs) -> Result<()> {
    for path in &args.inputs {
        let label = detect_file(path)?
            .map(|fmt| fmt.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        println!("{}: {}", path.display(), label);
    }
    Ok(())
}

pub fn detect_file(path: &Path) -> Result<Option<ImageFormat>> {
    let mut src = RWops::from_file(path, "rb")
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let found = sdl2_img::detect::detect(&mut src);
    log::debug!("{}: probe result {:?}", path.display(), found);
    Ok(found)
}
