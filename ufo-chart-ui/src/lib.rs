//! Shared Dioxus components and Vega-Embed bridge for the UFO dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers around Vega-Embed via `js_sys::eval()`
//! - `renderer`: `WebRenderer`, the browser `ChartRenderer`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod renderer;
pub mod state;
