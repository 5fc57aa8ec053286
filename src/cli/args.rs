//! Command-line argument parsing.

use thiserror::Error;

use crate::config::parse_threshold;

/// Overrides collected from flags for a TUI run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub api_url: Option<String>,
    pub root_margin: Option<u16>,
    pub threshold: Option<f32>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(RunOptions),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("unknown argument '{0}'")]
    Unknown(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: String, value: String },
}

/// Parse command-line arguments and return the command to execute.
///
/// Flags taking a value accept both `--flag value` and `--flag=value`.
///
/// ```
/// use userfeed::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["userfeed".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--api-url" => {
                options.api_url = Some(take_value(&flag, inline, &mut args)?);
            }
            "--root-margin" => {
                let value = take_value(&flag, inline, &mut args)?;
                let margin = value.parse().map_err(|_| ArgsError::InvalidValue {
                    flag: flag.clone(),
                    value: value.clone(),
                })?;
                options.root_margin = Some(margin);
            }
            "--threshold" => {
                let value = take_value(&flag, inline, &mut args)?;
                let threshold =
                    parse_threshold(&flag, &value).map_err(|_| ArgsError::InvalidValue {
                        flag: flag.clone(),
                        value: value.clone(),
                    })?;
                options.threshold = Some(threshold);
            }
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }

    Ok(CliCommand::RunTui(options))
}

fn take_value<I>(flag: &str, inline: Option<String>, args: &mut I) -> Result<String, ArgsError>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| args.next())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}
