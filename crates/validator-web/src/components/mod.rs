//! Transient UI built with Leptos and mounted into the server-rendered page.
//!
//! - [`notification`] - auto-dismissing alert banners
//! - [`progress`] - upload progress bar
//! - [`file_info`] - descriptor under a file picker

pub mod file_info;
pub mod notification;
pub mod progress;

pub use notification::BannerNotifier;
