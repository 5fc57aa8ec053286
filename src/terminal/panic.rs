//! Panic hook that puts the terminal back before the report is printed.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal-restoring hook in front of the current panic hook.
///
/// Call after `color_eyre::install()` so its report is still printed, and
/// before creating the [`TerminalManager`](super::TerminalManager).
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("panic: {}", panic_info);
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_installs() {
        setup_panic_hook();
        let _ = panic::take_hook();
    }
}
