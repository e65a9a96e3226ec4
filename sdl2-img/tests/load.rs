mod common;

use std::fs;

use sdl2_img::{Error, ImageFormat, RWops};

#[test]
fn png_stream_loads_with_original_size() {
    let _guard = common::serial();
    let bytes = common::png_bytes(16, 8);
    let mut src = RWops::from_bytes(&bytes).unwrap();
    assert_eq!(src.size().unwrap(), bytes.len() as u64);
    let surface = sdl2_img::load_rw(&mut src).expect("load png");
    assert_eq!((surface.width(), surface.height()), (16, 8));
    assert!(surface.pitch() >= 16);
    common::free(surface);
}

#[test]
fn truncated_png_reports_native_message() {
    let _guard = common::serial();
    let bytes = common::png_bytes(16, 8);
    let mut src = RWops::from_bytes(&bytes[..40]).unwrap();
    let err = sdl2_img::load_rw(&mut src).unwrap_err();
    match err {
        Error::OperationFailed(msg) => {
            assert!(!msg.is_empty());
            // Nothing else failed since, so SDL's slot still holds the same text.
            assert_eq!(sdl2_img::get_error(), msg);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn owned_stream_is_consumed() {
    let _guard = common::serial();
    let bytes = common::png_bytes(4, 4);
    let src = RWops::from_bytes(&bytes).unwrap();
    let surface = sdl2_img::load_rw_owned(src).expect("owned load");
    assert_eq!(surface.width(), 4);
    common::free(surface);
}

#[test]
fn typed_loads_accept_hints() {
    let _guard = common::serial();
    let bytes = common::png_bytes(5, 3);

    let mut src = RWops::from_bytes(&bytes).unwrap();
    let surface = sdl2_img::load_typed_rw(&mut src, "PNG").unwrap();
    assert_eq!((surface.width(), surface.height()), (5, 3));
    common::free(surface);

    let mut src = RWops::from_bytes(&bytes).unwrap();
    let surface = sdl2_img::load_format_rw(&mut src, ImageFormat::Png).unwrap();
    assert_eq!(surface.height(), 3);
    common::free(surface);

    let src = RWops::from_bytes(&bytes).unwrap();
    let surface = sdl2_img::load_typed_rw_owned(src, "png").unwrap();
    assert_eq!(surface.width(), 5);
    common::free(surface);
}

#[test]
fn bad_hint_is_rejected_before_the_native_call() {
    let _guard = common::serial();
    let bytes = common::png_bytes(2, 2);
    let src = RWops::from_bytes(&bytes).unwrap();
    let err = sdl2_img::load_typed_rw_owned(src, "P\0NG").unwrap_err();
    assert!(err.to_string().contains("interior nul"));
}

#[test]
fn file_paths_and_file_streams_load() {
    let _guard = common::serial();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.png");
    fs::write(&path, common::png_bytes(7, 9)).unwrap();

    let surface = sdl2_img::load(&path).expect("load from path");
    assert_eq!((surface.width(), surface.height()), (7, 9));
    common::free(surface);

    let src = RWops::from_file(&path, "rb").unwrap();
    let surface = sdl2_img::load_rw_owned(src).expect("load from file stream");
    assert_eq!(surface.width(), 7);
    common::free(surface);
}

#[test]
fn missing_file_fails_with_message() {
    let _guard = common::serial();
    let dir = tempfile::tempdir().unwrap();
    let err = sdl2_img::load(dir.path().join("nope.png")).unwrap_err();
    assert!(!err.message().unwrap_or_default().is_empty());
}

#[test]
fn single_image_loads_as_one_frame_animation() {
    let _guard = common::serial();
    let bytes = common::png_bytes(6, 2);
    let mut src = RWops::from_bytes(&bytes).unwrap();
    let anim = sdl2_img::load_animation_rw(&mut src).expect("animation");
    assert_eq!(anim.len(), 1);
    assert_eq!((anim.width(), anim.height()), (6, 2));
    let frame = anim.frame(0).unwrap();
    assert_eq!((frame.width(), frame.height()), (6, 2));
    // A still image has no timing of its own.
    assert_eq!(frame.delay(), 0);
    assert!(anim.frame(1).is_none());
    assert_eq!(anim.frames().count(), 1);
}

#[test]
fn garbage_is_not_an_animation() {
    let _guard = common::serial();
    let junk = [0u8; 32];
    let src = RWops::from_bytes(&junk).unwrap();
    assert!(sdl2_img::load_animation_rw_owned(src).is_err());
}

#[test]
fn file_stream_size_matches_file_length() {
    let _guard = common::serial();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sized.png");
    let bytes = common::png_bytes(9, 4);
    fs::write(&path, &bytes).unwrap();
    let mut src = RWops::from_file(&path, "rb").unwrap();
    assert_eq!(src.size().unwrap(), bytes.len() as u64);
}
