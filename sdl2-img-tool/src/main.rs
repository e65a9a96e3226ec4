use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod convert;
mod detect;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    init_logging(args.verbose)?;

    // Version queries and signature checks work without any codec loaded.
    let _ctx = if args.command.decodes() {
        let flags = cli::init_flags(&args.backends);
        let ctx = sdl2_img::init(flags)
            .with_context(|| format!("Failed to initialize SDL_image backends {:?}", flags))?;
        log::info!("SDL_image initialized with {:?}", flags);
        Some(ctx)
    } else {
        None
    };

    run(args.command)
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        2 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level).context("Failed to install logger")
}

fn run(cmd: cli::Command) -> Result<()> {
    match cmd {
        cli::Command::Version => {
            println!("linked:   SDL2_image {}", sdl2_img::linked_version());
            println!("compiled: SDL2_image {}", sdl2_img::compiled_version());
            Ok(())
        }
        cli::Command::Detect(args) => detect::run_detect(&args),
        cli::Command::Info(args) => convert::run_info(&args),
        cli::Command::Convert(args) => convert::run_convert(&args),
    }
}
