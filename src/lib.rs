//! # landing
//!
//! Leptos + WASM interactivity for a single-page marketing site: theme
//! switching, a collapsible navigation bar with scroll-spy, keyword search,
//! an image gallery with a lightbox, an animated line chart, a validated
//! contact form, and scroll-reveal feature cards.
//!
//! Region state lives in [`state`] and is plain Rust, testable without a
//! browser. [`components`] own the markup and forward DOM events to that
//! state. The line chart is drawn by the `chart` crate through the
//! `ChartHost` bridge component.

pub mod app;
pub mod components;
pub mod consts;
pub mod data;
pub mod state;
pub mod util;
