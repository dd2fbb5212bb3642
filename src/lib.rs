//! Scroll-synchronized landing site.
//!
//! [`engine`] holds the pure animation state machines and is testable off
//! the browser; [`hooks`] and [`components`] bind it to the DOM with Yew.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod engine;
pub mod hooks;
pub mod pages;

pub use app::App;
