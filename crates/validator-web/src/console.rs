//! Console logging helpers.

use web_sys::console;

pub fn debug(message: &str) {
    console::debug_1(&message.into());
}

pub fn warn(message: &str) {
    console::warn_1(&message.into());
}

pub fn error(message: &str) {
    console::error_1(&message.into());
}
