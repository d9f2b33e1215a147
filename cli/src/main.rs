use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use raster::io::{load_obj, save_png};
use raster::render::{Camera, render};

mod logging;
mod settings;
mod stress;

use logging::{LoggingConfig, init_logging};
use settings::{Args, Settings, USAGE};

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());
    match run(std::env::args().skip(1)) {
        Ok(code) => code,
        Err(error) => {
            log::error!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: impl Iterator<Item = String>) -> Result<ExitCode> {
    let args = Args::parse(args)?;
    if args.help {
        println!("{}", USAGE);
        return Ok(ExitCode::SUCCESS);
    }

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings.apply(&args);
    log::debug!("{:?}", settings);

    let mesh = load_obj(&settings.input).with_context(|| format!("Failed to load mesh {:?}", settings.input))?;

    if settings.sse {
        log::info!("Running stress test...");
        stress::run(&mesh);
        log::info!("Stress test finished");
        return Ok(ExitCode::SUCCESS);
    }

    let options = settings.rasterizer_options();
    log::info!("Rendering {}x{} with {:?}", settings.width, settings.height, options);
    let framebuffer = render(&mesh, &Camera::fixed(), settings.width, settings.height, options)
        .context("Failed to render mesh")?;

    Ok(write_image(&framebuffer, &settings.output))
}

/// An encoding failure is reported but does not undo the render that produced the image.
fn write_image(framebuffer: &raster::render::Framebuffer, path: &Path) -> ExitCode {
    match save_png(framebuffer, path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{}", error);
            ExitCode::from(1)
        }
    }
}
