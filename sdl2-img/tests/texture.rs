mod common;

use std::fs;

use sdl2_img::{RWops, Renderer, sys};

/// Software renderer drawing into a scratch surface; needs no window or video init.
struct SoftRenderer {
    _target: common::Blank,
    renderer: Renderer,
}

impl SoftRenderer {
    fn new() -> Self {
        let target = common::Blank::new(32, 32);
        let ptr = unsafe { sys::SDL_CreateSoftwareRenderer(target.surface().as_ptr()) };
        let renderer = unsafe { Renderer::from_raw(ptr) }.expect("software renderer");
        Self {
            _target: target,
            renderer,
        }
    }
}

impl Drop for SoftRenderer {
    fn drop(&mut self) {
        unsafe { sys::SDL_DestroyRenderer(self.renderer.as_ptr()) };
    }
}

fn destroy(texture: sdl2_img::Texture) {
    unsafe { sys::SDL_DestroyTexture(texture.into_raw()) }
}

#[test]
fn texture_from_stream_reports_image_size() {
    let _guard = common::serial();
    let soft = SoftRenderer::new();
    let bytes = common::png_bytes(10, 6);

    let mut src = RWops::from_bytes(&bytes).unwrap();
    let texture = sdl2_img::load_texture_rw(&soft.renderer, &mut src).expect("texture");
    let info = texture.query().unwrap();
    assert_eq!((info.width, info.height), (10, 6));
    destroy(texture);

    let src = RWops::from_bytes(&bytes).unwrap();
    let texture = sdl2_img::load_texture_typed_rw_owned(&soft.renderer, src, "PNG").unwrap();
    assert_eq!(texture.query().unwrap().width, 10);
    destroy(texture);
}

#[test]
fn texture_from_path() {
    let _guard = common::serial();
    let soft = SoftRenderer::new();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tex.png");
    fs::write(&path, common::png_bytes(3, 5)).unwrap();

    let texture = sdl2_img::load_texture(&soft.renderer, &path).expect("texture from path");
    assert_eq!(texture.query().unwrap().height, 5);
    destroy(texture);

    let src = RWops::from_file(&path, "rb").unwrap();
    let texture = sdl2_img::load_texture_rw_owned(&soft.renderer, src).unwrap();
    assert_eq!(texture.query().unwrap().width, 3);
    destroy(texture);
}

#[test]
fn corrupt_texture_source_fails() {
    let _guard = common::serial();
    let soft = SoftRenderer::new();
    let junk = [0x42u8; 48];
    let mut src = RWops::from_bytes(&junk).unwrap();
    let err = sdl2_img::load_texture_typed_rw(&soft.renderer, &mut src, "PNG").unwrap_err();
    assert!(!err.to_string().is_empty());
}
