mod common;

use sdl2_img::{Error, InitFlags, Version};

#[test]
fn empty_init_then_shutdown() {
    let _guard = common::serial();
    let ctx = sdl2_img::init(InitFlags::empty()).expect("empty init");
    assert!(ctx.flags().is_empty());
    ctx.shutdown();
}

#[test]
fn unsupported_backend_fails_and_leaves_library_reusable() {
    let _guard = common::serial();
    let bogus = InitFlags::from_bits_retain(0x100);
    let err = sdl2_img::init(bogus).unwrap_err();
    assert_eq!(err, Error::InitializationFailed);

    let ctx = sdl2_img::init(InitFlags::default()).expect("full re-init after failure");
    assert_eq!(ctx.flags(), InitFlags::default());
    drop(ctx);
}

#[test]
fn shortfall_is_not_partial_success() {
    let _guard = common::serial();
    let mixed = InitFlags::PNG | InitFlags::from_bits_retain(0x100);
    assert!(matches!(
        sdl2_img::init(mixed),
        Err(Error::InitializationFailed)
    ));
}

#[test]
fn quit_without_init_is_harmless() {
    let _guard = common::serial();
    sdl2_img::quit();
    sdl2_img::quit();
}

#[test]
fn linked_version_is_sdl2_line() {
    // Bindings target the 2.6+ API (QOI/AVIF/JXL probes, animations).
    let linked = sdl2_img::linked_version();
    assert_eq!(linked.major, 2, "linked SDL2_image {}", linked);
    assert!(linked >= Version::new(2, 6, 0), "linked SDL2_image {}", linked);
}

#[test]
fn compiled_version_matches_bindings() {
    let compiled = sdl2_img::compiled_version();
    assert_eq!(compiled.major, 2);
    assert!(compiled.minor >= 6);
}
