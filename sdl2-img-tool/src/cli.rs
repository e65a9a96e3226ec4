use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, builder::ValueHint};
use sdl2_img::InitFlags;

/// Command-line arguments for sdl2-img-tool.
#[derive(Parser, Debug)]
#[command(
    name = "sdl2-img-tool",
    about = "Inspect, sniff and convert images with SDL2_image.",
    author,
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Optional backends to initialize before running the command
    #[arg(
        long = "init",
        value_enum,
        value_delimiter = ',',
        default_values_t = [Backend::Png, Backend::Jpg],
        global = true
    )]
    pub backends: Vec<Backend>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the linked and compiled SDL2_image versions
    Version,
    /// Report which format signature each file carries
    Detect(DetectArgs),
    /// Load an image and print its dimensions
    Info(InfoArgs),
    /// Load an image and write it back out as PNG or JPEG
    Convert(ConvertArgs),
}

impl Command {
    /// Whether the command decodes or encodes pixels and so needs backends loaded.
    pub fn decodes(&self) -> bool {
        matches!(self, Command::Info(_) | Command::Convert(_))
    }
}

#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Files to sniff
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath, required = true)]
    pub inputs: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Image to load
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Type hint for formats without a signature (e.g. TGA)
    #[arg(long = "type", value_name = "HINT")]
    pub type_hint: Option<String>,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Source image
    #[arg(value_name = "IN", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Destination path
    #[arg(value_name = "OUT", value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Output format (defaults to the output file extension)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<SaveFormat>,

    /// JPEG quality (1-100)
    #[arg(
        long,
        short = 'q',
        default_value_t = 90,
        value_parser = clap::value_parser!(i32).range(1..=100)
    )]
    pub quality: i32,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Jpg,
    Png,
    Tif,
    Webp,
    Jxl,
    Avif,
}

impl Backend {
    pub fn flag(self) -> InitFlags {
        match self {
            Backend::Jpg => InitFlags::JPG,
            Backend::Png => InitFlags::PNG,
            Backend::Tif => InitFlags::TIF,
            Backend::Webp => InitFlags::WEBP,
            Backend::Jxl => InitFlags::JXL,
            Backend::Avif => InitFlags::AVIF,
        }
    }
}

pub fn init_flags(backends: &[Backend]) -> InitFlags {
    backends
        .iter()
        .fold(InitFlags::empty(), |acc, b| acc | b.flag())
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    Png,
    #[value(alias = "jpeg")]
    Jpg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pixel_commands_load_backends() {
        let cmd = |argv: &[&str]| Cli::try_parse_from(argv).unwrap().command;
        assert!(!cmd(&["sdl2-img", "version"]).decodes());
        assert!(!cmd(&["sdl2-img", "detect", "a.png"]).decodes());
        assert!(cmd(&["sdl2-img", "info", "a.png"]).decodes());
        assert!(cmd(&["sdl2-img", "convert", "a.png", "b.jpg"]).decodes());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn init_defaults_to_png_and_jpg() {
        let cli = Cli::try_parse_from(["sdl2-img-tool", "version"]).unwrap();
        assert_eq!(init_flags(&cli.backends), InitFlags::PNG | InitFlags::JPG);
    }

    #[test]
    fn init_accepts_comma_list() {
        let cli =
            Cli::try_parse_from(["sdl2-img-tool", "--init", "png,webp,avif", "version"]).unwrap();
        assert_eq!(
            init_flags(&cli.backends),
            InitFlags::PNG | InitFlags::WEBP | InitFlags::AVIF
        );
    }

    #[test]
    fn convert_parses_format_and_quality() {
        let cli = Cli::try_parse_from([
            "sdl2-img-tool",
            "convert",
            "in.bmp",
            "out.bin",
            "--format",
            "jpeg",
            "-q",
            "75",
        ])
        .unwrap();
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.format, Some(SaveFormat::Jpg));
        assert_eq!(args.quality, 75);
    }

    #[test]
    fn quality_out_of_range_is_rejected() {
        let res = Cli::try_parse_from(["sdl2-img-tool", "convert", "a.png", "b.jpg", "-q", "0"]);
        assert!(res.is_err());
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["sdl2-img-tool", "-vv", "version"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
