use std::env;
use std::path::{Path, PathBuf};

#[path = "build/link.rs"]
mod link;

fn env_path(name: &str) -> Option<PathBuf> {
    println!("cargo:rerun-if-env-changed={}", name);
    env::var_os(name).map(PathBuf::from)
}

fn locate_src_dir(manifest_dir: &Path) -> PathBuf {
    if let Some(dir) = env_path("SDL2_IMAGE_SRC_DIR") {
        return dir;
    }

    let workspace_root = manifest_dir
        .parent()
        .expect("sdl2-img-sys has no parent dir");

    let submodule_path = workspace_root.join("SDL_image");
    if submodule_path.join("CMakeLists.txt").is_file() {
        return submodule_path;
    }

    // Fallback: sibling checkout next to the workspace.
    workspace_root
        .parent()
        .expect("workspace has no parent dir")
        .join("SDL_image")
}

/// Header directories searched when regenerating bindings.
fn include_dirs(pkg_includes: &[PathBuf]) -> Vec<PathBuf> {
    if let Some(dir) = env_path("SDL2_INCLUDE_DIR") {
        return vec![dir];
    }
    pkg_includes
        .iter()
        .cloned()
        .chain([
            PathBuf::from("/usr/include/SDL2"),
            PathBuf::from("/usr/local/include/SDL2"),
        ])
        .filter(|d| d.join("SDL_image.h").is_file())
        .collect()
}

fn build_vendored(manifest_dir: &Path, target_env: &str, target_os: &str) -> Vec<PathBuf> {
    let src_dir = locate_src_dir(manifest_dir);
    if !src_dir.join("CMakeLists.txt").is_file() {
        panic!(
            "Could not find SDL_image sources; set SDL2_IMAGE_SRC_DIR (current: {})",
            src_dir.display()
        );
    }

    let mut cfg = cmake::Config::new(&src_dir);
    cfg.profile("Release");
    for (key, value) in link::VENDORED_DEFINES {
        cfg.define(key, value);
    }
    let dst = cfg.build();

    println!("cargo:rustc-link-search=native={}/lib", dst.display());
    println!("cargo:rustc-link-search=native={}/lib64", dst.display());
    for line in link::vendored_link_lines(target_env, target_os) {
        println!("{}", line);
    }
    println!(
        "cargo:rerun-if-changed={}",
        src_dir.join("include/SDL_image.h").display()
    );

    // The archive still needs SDL2 itself, linked dynamically.
    match pkg_config::Config::new().probe("sdl2") {
        Ok(sdl2) => {
            let mut includes = vec![dst.join("include/SDL2")];
            includes.extend(sdl2.include_paths);
            includes
        }
        Err(err) => {
            println!("cargo:warning=pkg-config could not find sdl2 ({}); linking -lSDL2", err);
            link_sdl2_fallback();
            vec![dst.join("include/SDL2")]
        }
    }
}

fn link_sdl2_fallback() {
    if let Some(dir) = env_path("SDL2_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir.display());
    }
    println!("cargo:rustc-link-lib=dylib=SDL2");
}

/// Resolve the system SDL2_image through pkg-config, the way its `.pc` file describes it.
///
/// With `static-link`, pkg-config's `--static` view emits the private codec
/// libraries (png, jpeg, tiff, webp, zlib, ...) alongside the archive.
fn link_system() -> Vec<PathBuf> {
    let static_link = cfg!(feature = "static-link");
    let found = pkg_config::Config::new()
        .atleast_version("2.6.0")
        .statik(static_link)
        .probe("SDL2_image");
    match found {
        Ok(lib) => lib.include_paths,
        Err(err) => {
            let lines = link::fallback_link_lines(static_link)
                .unwrap_or_else(|msg| panic!("{} (pkg-config: {})", msg, err));
            println!("cargo:warning=pkg-config could not find SDL2_image ({}); using plain -l flags", err);
            for dir in [env_path("SDL2_IMAGE_LIB_DIR"), env_path("SDL2_LIB_DIR")]
                .into_iter()
                .flatten()
            {
                println!("cargo:rustc-link-search=native={}", dir.display());
            }
            for line in lines {
                println!("{}", line);
            }
            Vec::new()
        }
    }
}

fn generate_bindings(target: &str, pkg_includes: &[PathBuf], out_dir: &Path) {
    let dirs = include_dirs(pkg_includes);
    let Some(header_dir) = dirs.first() else {
        panic!("Could not find SDL_image.h; set SDL2_INCLUDE_DIR to the SDL2 include directory");
    };
    println!(
        "cargo:rerun-if-changed={}",
        header_dir.join("SDL_image.h").display()
    );

    let bindings = bindgen::Builder::default()
        .header(header_dir.join("SDL_image.h").to_string_lossy())
        .clang_args(dirs.iter().map(|d| format!("-I{}", d.display())))
        .clang_arg(format!("--target={}", target))
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .prepend_enum_name(false)
        .layout_tests(false)
        .allowlist_function("IMG_.*")
        .allowlist_type("IMG_.*")
        .allowlist_var("SDL_IMAGE_.*")
        .allowlist_var("IMG_INIT_.*")
        .allowlist_var("RW_SEEK_.*")
        .allowlist_var("SDL_PIXELFORMAT_.*")
        .allowlist_function("SDL_RW(FromFile|FromMem|FromConstMem|close|seek|tell|size)")
        .allowlist_function("SDL_(GetError|ClearError)")
        .allowlist_function("SDL_(CreateRGBSurfaceWithFormat|FreeSurface)")
        .allowlist_function("SDL_(CreateSoftwareRenderer|DestroyRenderer|DestroyTexture|QueryTexture)")
        .opaque_type("SDL_RWops")
        .opaque_type("SDL_PixelFormat")
        .generate()
        .expect("bindgen failed");

    bindings
        .write_to_file(out_dir.join("bindings.rs"))
        .expect("failed to write bindings");
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR"));
    let target = env::var("TARGET").expect("TARGET");
    let target_env = env::var("CARGO_CFG_TARGET_ENV").unwrap_or_default();
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    if target_os == "emscripten" || target.starts_with("wasm32-unknown") {
        panic!("sdl2-img-sys does not support {}", target);
    }

    let pkg_includes = if cfg!(feature = "vendored") {
        build_vendored(&manifest_dir, &target_env, &target_os)
    } else {
        link_system()
    };

    if cfg!(feature = "bindgen") {
        generate_bindings(&target, &pkg_includes, &out_dir);
    }
    println!(
        "cargo:rerun-if-changed={}",
        manifest_dir.join("src/bindings.rs").display()
    );
    println!(
        "cargo:rerun-if-changed={}",
        manifest_dir.join("build/link.rs").display()
    );
}
