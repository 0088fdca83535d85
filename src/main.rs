use std::{fmt, path::PathBuf, process::ExitCode};

use structopt::StructOpt;

mod error;
mod i3;
mod import;
mod process;
mod screenshot;

/// A rectangle on the root window, as reported by the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub(crate) struct Rect {
    /// The left edge, negative for outputs left of the origin.
    pub(crate) x: i32,
    /// The top edge, negative for outputs above the origin.
    pub(crate) y: i32,
    /// The width of the rectangle.
    pub(crate) width: u32,
    /// The height of the rectangle.
    pub(crate) height: u32,
}

impl Rect {
    /// Returns the crop geometry covering the rectangle.
    pub(crate) fn geometry(self) -> Geometry {
        Geometry {
            width: self.width,
            height: self.height,
            x: self.x,
            y: self.y,
        }
    }
}

/// An X11 geometry specification, displayed as `WIDTHxHEIGHT+X+Y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Geometry {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Geometry {
            width,
            height,
            x,
            y,
        } = self;
        write!(f, "{width}x{height}{x:+}{y:+}")
    }
}

/// Parses a capture quality between 1 and 100.
fn parse_quality(s: &str) -> Result<u8, String> {
    match s.parse::<u8>() {
        Ok(quality @ 1..=100) => Ok(quality),
        _ => Err(format!("`{s}` is not a quality between 1 and 100")),
    }
}

/// Saves a screenshot of the focused i3 workspace to a timestamped file
#[derive(Debug, StructOpt)]
struct Config {
    /// the directory screenshots are saved to [default: ~/screenshots]
    #[structopt(long, short, parse(from_os_str))]
    output_dir: Option<PathBuf>,
    /// the quality passed to the capture program, 1 to 100 [default: 100]
    #[structopt(long, short, parse(try_from_str = parse_quality))]
    quality: Option<u8>,
    /// the i3 IPC client used to list workspaces, e.g. swaymsg [default: i3-msg]
    #[structopt(long)]
    ipc_client: Option<String>,
    /// log each step to stderr
    #[structopt(long, short)]
    verbose: bool,
}

/// Sets up logging to stderr, honouring `RUST_LOG`.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(config: Config) -> anyhow::Result<PathBuf> {
    let dir = match config.output_dir {
        Some(dir) => dir,
        None => screenshot::default_dir()?,
    };

    screenshot::take(
        &i3::Msg::new(
            config
                .ipc_client
                .unwrap_or_else(|| i3::DEFAULT_CLIENT.to_owned()),
        ),
        &import::Import::new(
            import::DEFAULT_PROGRAM,
            config.quality.unwrap_or(import::DEFAULT_QUALITY),
        ),
        &dir,
        chrono::Local::now(),
    )
}

fn main() -> ExitCode {
    let config = Config::from_args();
    init_logger(config.verbose);

    match run(config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("wsshot: {err:#}");
            ExitCode::from(error::exit_code_of(&err))
        }
    }
}
