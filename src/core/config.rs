/// Presenter configuration parsed from command-line arguments.

use thiserror::Error;

use crate::core::terminal::{DEFAULT_WIDTH, MIN_WIDTH};

pub const DEFAULT_AUTOPLAY_STEPS: usize = 12;
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("--width must be at least 20, got {0}")]
    WidthTooSmall(usize),
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenterConfig {
    pub width: usize,
    pub show_ids: bool,
    /// Seed for autoplay. `None` means interactive play.
    pub autoplay: Option<u64>,
    pub steps: usize,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub help: bool,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            show_ids: false,
            autoplay: None,
            steps: DEFAULT_AUTOPLAY_STEPS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            help: false,
        }
    }
}

impl PresenterConfig {
    /// Parse arguments, not including the program name.
    pub fn from_args<I>(args: I) -> Result<PresenterConfig, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = PresenterConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--width" => {
                    let width = parse_value(&mut args, "--width")?;
                    if width < MIN_WIDTH {
                        return Err(ConfigError::WidthTooSmall(width));
                    }
                    config.width = width;
                }
                "--show-ids" => config.show_ids = true,
                "--autoplay" => config.autoplay = Some(parse_value(&mut args, "--autoplay")?),
                "--steps" => config.steps = parse_value(&mut args, "--steps")?,
                "--log" => {
                    config.log_filter = args.next().ok_or(ConfigError::MissingValue("--log"))?;
                }
                "--help" | "-h" => config.help = true,
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(config)
    }
}

fn parse_value<T, I>(args: &mut I, flag: &'static str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    I: Iterator<Item = String>,
{
    let value = args.next().ok_or(ConfigError::MissingValue(flag))?;
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { flag, value })
}
