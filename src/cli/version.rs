//! `--version` and `--help` output.

use crate::config::{ENV_API_URL, ENV_LOG, ENV_ROOT_MARGIN, ENV_THRESHOLD, ENV_TIMEOUT_SECS};

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("userfeed {}", VERSION)
}

pub fn help_text() -> String {
    format!(
        "\
{version}
Scroll through an endless feed of user profile cards.

USAGE:
    userfeed [OPTIONS]

OPTIONS:
    --api-url <URL>        Users endpoint [env: {api}]
    --root-margin <ROWS>   Rows around the viewport counted as visible [env: {margin}]
    --threshold <0..1>     Visible fraction of the sentinel that triggers loading [env: {threshold}]
    -h, --help             Print help
    -V, --version          Print version

ENVIRONMENT:
    {timeout}  Request timeout in seconds (default 30)
    {log}            Log filter, e.g. userfeed=debug (falls back to RUST_LOG)

KEYS:
    j/Down k/Up  scroll   PgDn/Space PgUp  page   g/Home G/End  jump   q/Esc  quit
",
        version = version_line(),
        api = ENV_API_URL,
        margin = ENV_ROOT_MARGIN,
        threshold = ENV_THRESHOLD,
        timeout = ENV_TIMEOUT_SECS,
        log = ENV_LOG,
    )
}

/// Print the version and exit successfully.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}

/// Print usage and exit successfully.
pub fn handle_help_command() -> ! {
    print!("{}", help_text());
    std::process::exit(0)
}
