//! Animated line chart rendered to a 2D canvas context.
//!
//! This crate is compiled to WebAssembly alongside the landing page. It owns
//! the chart's whole lifecycle: the data series, the one-shot grow-in
//! animation, the plot geometry, and the draw calls. The host component only
//! measures the element, forwards resize notifications, and drives the frame
//! loop while [`engine::Chart::tick`] asks for another frame.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level chart and testable [`engine::ChartCore`] |
//! | [`series`] | Labelled data points and scale normalisation |
//! | [`animation`] | The `Idle → Animating → Done` progress state machine |
//! | [`layout`] | Pure plot geometry: grid lines, points, labels, area |
//! | [`render`] | Draw calls against `CanvasRenderingContext2d` |
//! | [`consts`] | Shared numeric and colour constants |

pub mod animation;
pub mod consts;
pub mod engine;
pub mod layout;
pub mod render;
pub mod series;
