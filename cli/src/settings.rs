//! Render settings: built-in defaults, optionally overridden by a TOML file,
//! then by command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use raster::render::{Parallelism, RasterizerOptions, Traversal};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// OBJ file to load
    pub input: PathBuf,

    /// PNG file to write
    pub output: PathBuf,

    pub width: usize,
    pub height: usize,

    /// Render with row bands on all cores
    pub parallel: bool,

    /// Only test pixels inside each triangle's bounding box
    pub bbox: bool,

    /// Run the vector arithmetic stress harness instead of rendering
    pub sse: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("../input/sphere.obj"),
            output: PathBuf::from("../output/sphere.png"),
            width: 1920,
            height: 1080,
            parallel: false,
            bbox: false,
            sse: false,
        }
    }
}

impl Settings {
    /// Reads a settings file. Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read settings file {:?}", path))?;
        let settings = Self::from_toml(&content).with_context(|| format!("Failed to parse settings file {:?}", path))?;
        log::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Command-line flags take precedence over whatever is already set.
    pub fn apply(&mut self, args: &Args) {
        if let Some(input) = &args.input {
            self.input = input.clone();
        }
        if let Some(output) = &args.output {
            self.output = output.clone();
        }
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(height) = args.height {
            self.height = height;
        }
        self.parallel |= args.parallel;
        self.bbox |= args.bbox;
        self.sse |= args.sse;
    }

    pub fn rasterizer_options(&self) -> RasterizerOptions {
        RasterizerOptions {
            traversal: if self.bbox { Traversal::BoundingBox } else { Traversal::Exhaustive },
            parallelism: if self.parallel { Parallelism::RowBands } else { Parallelism::Serial },
        }
    }
}

/// Parsed command line. Unset values leave the settings untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub config: Option<PathBuf>,
    pub sse: bool,
    pub parallel: bool,
    pub bbox: bool,
    pub help: bool,
}

pub const USAGE: &str = "\
usage: rasterise [-i input.obj] [-o output.png] [-w width] [-h height]
                 [-c settings.toml] [--parallel] [--bbox] [--sse]";

impl Args {
    /// Parses flags, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(flag) = args.next() {
            let mut value = || args.next().with_context(|| format!("Missing value after '{}'", flag));
            match flag.as_str() {
                "-i" => parsed.input = Some(PathBuf::from(value()?)),
                "-o" => parsed.output = Some(PathBuf::from(value()?)),
                "-c" => parsed.config = Some(PathBuf::from(value()?)),
                "-w" => parsed.width = Some(parse_dimension(&flag, &value()?)?),
                "-h" => parsed.height = Some(parse_dimension(&flag, &value()?)?),
                "--sse" => parsed.sse = true,
                "--parallel" => parsed.parallel = true,
                "--bbox" => parsed.bbox = true,
                "--help" => parsed.help = true,
                other => bail!("Unknown argument '{}'\n{}", other, USAGE),
            }
        }
        Ok(parsed)
    }
}

fn parse_dimension(flag: &str, value: &str) -> Result<usize> {
    value.parse::<usize>().with_context(|| format!("Invalid value '{}' for '{}'", value, flag))
}
