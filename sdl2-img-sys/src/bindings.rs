// Declarations matching `SDL_image.h` 2.8.x and the SDL2 core entry points it depends on.
// Keep in sync with the allowlist in build.rs.

pub const SDL_IMAGE_MAJOR_VERSION: u32 = 2;
pub const SDL_IMAGE_MINOR_VERSION: u32 = 8;
pub const SDL_IMAGE_PATCHLEVEL: u32 = 2;

pub const RW_SEEK_SET: u32 = 0;
pub const RW_SEEK_CUR: u32 = 1;
pub const RW_SEEK_END: u32 = 2;

pub type Uint8 = u8;
pub type Uint32 = u32;
pub type Sint64 = i64;

pub type IMG_InitFlags = ::std::os::raw::c_uint;
pub const IMG_INIT_JPG: IMG_InitFlags = 1;
pub const IMG_INIT_PNG: IMG_InitFlags = 2;
pub const IMG_INIT_TIF: IMG_InitFlags = 4;
pub const IMG_INIT_WEBP: IMG_InitFlags = 8;
pub const IMG_INIT_JXL: IMG_InitFlags = 16;
pub const IMG_INIT_AVIF: IMG_InitFlags = 32;

pub type SDL_PixelFormatEnum = ::std::os::raw::c_uint;
pub const SDL_PIXELFORMAT_UNKNOWN: SDL_PixelFormatEnum = 0;
pub const SDL_PIXELFORMAT_RGB24: SDL_PixelFormatEnum = 386930691;
pub const SDL_PIXELFORMAT_ARGB8888: SDL_PixelFormatEnum = 372645892;
pub const SDL_PIXELFORMAT_RGBA8888: SDL_PixelFormatEnum = 373694468;
pub const SDL_PIXELFORMAT_ABGR8888: SDL_PixelFormatEnum = 376840196;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_version {
    pub major: Uint8,
    pub minor: Uint8,
    pub patch: Uint8,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_Rect {
    pub x: ::std::os::raw::c_int,
    pub y: ::std::os::raw::c_int,
    pub w: ::std::os::raw::c_int,
    pub h: ::std::os::raw::c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_PixelFormat {
    _unused: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_BlitMap {
    _unused: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_Surface {
    pub flags: Uint32,
    pub format: *mut SDL_PixelFormat,
    pub w: ::std::os::raw::c_int,
    pub h: ::std::os::raw::c_int,
    pub pitch: ::std::os::raw::c_int,
    pub pixels: *mut ::std::os::raw::c_void,
    pub userdata: *mut ::std::os::raw::c_void,
    pub locked: ::std::os::raw::c_int,
    pub list_blitmap: *mut ::std::os::raw::c_void,
    pub clip_rect: SDL_Rect,
    pub map: *mut SDL_BlitMap,
    pub refcount: ::std::os::raw::c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_RWops {
    _unused: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_Renderer {
    _unused: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_Texture {
    _unused: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct IMG_Animation {
    pub w: ::std::os::raw::c_int,
    pub h: ::std::os::raw::c_int,
    pub count: ::std::os::raw::c_int,
    pub frames: *mut *mut SDL_Surface,
    pub delays: *mut ::std::os::raw::c_int,
}

unsafe extern "C" {
    pub fn SDL_GetError() -> *const ::std::os::raw::c_char;
    pub fn SDL_ClearError();

    pub fn SDL_RWFromFile(
        file: *const ::std::os::raw::c_char,
        mode: *const ::std::os::raw::c_char,
    ) -> *mut SDL_RWops;
    pub fn SDL_RWFromMem(
        mem: *mut ::std::os::raw::c_void,
        size: ::std::os::raw::c_int,
    ) -> *mut SDL_RWops;
    pub fn SDL_RWFromConstMem(
        mem: *const ::std::os::raw::c_void,
        size: ::std::os::raw::c_int,
    ) -> *mut SDL_RWops;
    pub fn SDL_RWsize(context: *mut SDL_RWops) -> Sint64;
    pub fn SDL_RWseek(
        context: *mut SDL_RWops,
        offset: Sint64,
        whence: ::std::os::raw::c_int,
    ) -> Sint64;
    pub fn SDL_RWtell(context: *mut SDL_RWops) -> Sint64;
    pub fn SDL_RWclose(context: *mut SDL_RWops) -> ::std::os::raw::c_int;

    pub fn SDL_CreateRGBSurfaceWithFormat(
        flags: Uint32,
        width: ::std::os::raw::c_int,
        height: ::std::os::raw::c_int,
        depth: ::std::os::raw::c_int,
        format: Uint32,
    ) -> *mut SDL_Surface;
    pub fn SDL_FreeSurface(surface: *mut SDL_Surface);

    pub fn SDL_CreateSoftwareRenderer(surface: *mut SDL_Surface) -> *mut SDL_Renderer;
    pub fn SDL_DestroyRenderer(renderer: *mut SDL_Renderer);
    pub fn SDL_DestroyTexture(texture: *mut SDL_Texture);
    pub fn SDL_QueryTexture(
        texture: *mut SDL_Texture,
        format: *mut Uint32,
        access: *mut ::std::os::raw::c_int,
        w: *mut ::std::os::raw::c_int,
        h: *mut ::std::os::raw::c_int,
    ) -> ::std::os::raw::c_int;
}

unsafe extern "C" {
    pub fn IMG_Linked_Version() -> *const SDL_version;
    pub fn IMG_Init(flags: ::std::os::raw::c_int) -> ::std::os::raw::c_int;
    pub fn IMG_Quit();

    pub fn IMG_LoadTyped_RW(
        src: *mut SDL_RWops,
        freesrc: ::std::os::raw::c_int,
        type_: *const ::std::os::raw::c_char,
    ) -> *mut SDL_Surface;
    pub fn IMG_Load(file: *const ::std::os::raw::c_char) -> *mut SDL_Surface;
    pub fn IMG_Load_RW(src: *mut SDL_RWops, freesrc: ::std::os::raw::c_int) -> *mut SDL_Surface;

    pub fn IMG_LoadTexture(
        renderer: *mut SDL_Renderer,
        file: *const ::std::os::raw::c_char,
    ) -> *mut SDL_Texture;
    pub fn IMG_LoadTexture_RW(
        renderer: *mut SDL_Renderer,
        src: *mut SDL_RWops,
        freesrc: ::std::os::raw::c_int,
    ) -> *mut SDL_Texture;
    pub fn IMG_LoadTextureTyped_RW(
        renderer: *mut SDL_Renderer,
        src: *mut SDL_RWops,
        freesrc: ::std::os::raw::c_int,
        type_: *const ::std::os::raw::c_char,
    ) -> *mut SDL_Texture;

    pub fn IMG_isAVIF(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isICO(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isCUR(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isBMP(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isGIF(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isJPG(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isJXL(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isLBM(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isPCX(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isPNG(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isPNM(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isSVG(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isQOI(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isTIF(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isXCF(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isXPM(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isXV(src: *mut SDL_RWops) -> ::std::os::raw::c_int;
    pub fn IMG_isWEBP(src: *mut SDL_RWops) -> ::std::os::raw::c_int;

    pub fn IMG_LoadAVIF_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadICO_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadCUR_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadBMP_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadGIF_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadJPG_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadJXL_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadLBM_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadPCX_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadPNG_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadPNM_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadSVG_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadQOI_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadTGA_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadTIF_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadXCF_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadXPM_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadXV_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadWEBP_RW(src: *mut SDL_RWops) -> *mut SDL_Surface;
    pub fn IMG_LoadSizedSVG_RW(
        src: *mut SDL_RWops,
        width: ::std::os::raw::c_int,
        height: ::std::os::raw::c_int,
    ) -> *mut SDL_Surface;

    pub fn IMG_ReadXPMFromArray(xpm: *mut *mut ::std::os::raw::c_char) -> *mut SDL_Surface;
    pub fn IMG_ReadXPMFromArrayToRGB888(
        xpm: *mut *mut ::std::os::raw::c_char,
    ) -> *mut SDL_Surface;

    pub fn IMG_SavePNG(
        surface: *mut SDL_Surface,
        file: *const ::std::os::raw::c_char,
    ) -> ::std::os::raw::c_int;
    pub fn IMG_SavePNG_RW(
        surface: *mut SDL_Surface,
        dst: *mut SDL_RWops,
        freedst: ::std::os::raw::c_int,
    ) -> ::std::os::raw::c_int;
    pub fn IMG_SaveJPG(
        surface: *mut SDL_Surface,
        file: *const ::std::os::raw::c_char,
        quality: ::std::os::raw::c_int,
    ) -> ::std::os::raw::c_int;
    pub fn IMG_SaveJPG_RW(
        surface: *mut SDL_Surface,
        dst: *mut SDL_RWops,
        freedst: ::std::os::raw::c_int,
        quality: ::std::os::raw::c_int,
    ) -> ::std::os::raw::c_int;

    pub fn IMG_LoadAnimation(file: *const ::std::os::raw::c_char) -> *mut IMG_Animation;
    pub fn IMG_LoadAnimation_RW(
        src: *mut SDL_RWops,
        freesrc: ::std::os::raw::c_int,
    ) -> *mut IMG_Animation;
    pub fn IMG_LoadAnimationTyped_RW(
        src: *mut SDL_RWops,
        freesrc: ::std::os::raw::c_int,
        type_: *const ::std::os::raw::c_char,
    ) -> *mut IMG_Animation;
    pub fn IMG_FreeAnimation(anim: *mut IMG_Animation);
    pub fn IMG_LoadGIFAnimation_RW(src: *mut SDL_RWops) -> *mut IMG_Animation;
    pub fn IMG_LoadWEBPAnimation_RW(src: *mut SDL_RWops) -> *mut IMG_Animation;
}
