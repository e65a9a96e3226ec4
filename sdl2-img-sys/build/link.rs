//! Link-line decisions shared by build.rs and the crate's unit tests.

/// CMake options for the vendored build.
///
/// PNG/JPG go through the bundled stb decoders and the miniz/tinyjpeg writers, and
/// the backends that would pull in external static archives are switched off, so the
/// resulting `libSDL2_image.a` depends on nothing but SDL2 and libm.
pub const VENDORED_DEFINES: &[(&str, &str)] = &[
    ("BUILD_SHARED_LIBS", "OFF"),
    ("SDL2IMAGE_SAMPLES", "OFF"),
    ("SDL2IMAGE_TESTS", "OFF"),
    ("SDL2IMAGE_INSTALL", "ON"),
    ("SDL2IMAGE_VENDORED", "OFF"),
    ("SDL2IMAGE_DEPS_SHARED", "OFF"),
    ("SDL2IMAGE_BACKEND_STB", "ON"),
    ("SDL2IMAGE_PNG_SAVE", "ON"),
    ("SDL2IMAGE_JPG_SAVE", "ON"),
    ("SDL2IMAGE_AVIF", "OFF"),
    ("SDL2IMAGE_JXL", "OFF"),
    ("SDL2IMAGE_TIF", "OFF"),
    ("SDL2IMAGE_WEBP", "OFF"),
];

/// `cargo:` lines that link the vendored static archive and what it needs.
pub fn vendored_link_lines(target_env: &str, target_os: &str) -> Vec<String> {
    let archive = if target_env == "msvc" {
        "SDL2_image-static"
    } else {
        "SDL2_image"
    };
    let mut lines = vec![format!("cargo:rustc-link-lib=static={}", archive)];
    // stb_image uses pow/ldexp.
    if target_env != "msvc" && target_os != "macos" {
        lines.push("cargo:rustc-link-lib=m".to_string());
    }
    lines
}

/// Link lines used when pkg-config cannot find SDL2_image.
///
/// Without pkg-config the transitive codec libraries of a static archive are
/// unknown, so only dynamic linking is offered.
pub fn fallback_link_lines(static_link: bool) -> Result<Vec<String>, String> {
    if static_link {
        return Err(
            "static-link needs pkg-config to list SDL2_image's codec libraries; \
             install pkg-config and the SDL2_image .pc file"
                .to_string(),
        );
    }
    Ok(vec![
        "cargo:rustc-link-lib=dylib=SDL2_image".to_string(),
        "cargo:rustc-link-lib=dylib=SDL2".to_string(),
    ])
}
