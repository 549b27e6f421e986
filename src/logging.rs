//! Global logging facade for the viewer.
//!
//! Log records are routed into `tui_logger` so they surface inside the log
//! console extension instead of corrupting the alternate screen. Nothing is
//! written to stdout or stderr while the TUI is active.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install `tui_logger` as the `log` backend. Safe to call repeatedly; only
/// the first call has any effect.
pub fn initialize() {
    INIT.call_once(|| {
        if tui_logger::init_logger(LevelFilter::Debug).is_ok() {
            tui_logger::set_default_level(LevelFilter::Debug);
        }
    });
}
