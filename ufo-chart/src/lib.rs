//! Vega-Lite chart descriptions and render orchestration for the UFO
//! sightings dashboard.
//!
//! - [`spec`]: serde model of the Vega-Lite v5 subset the dashboard uses
//! - [`builders`]: one function per chart, derived rows in, spec out
//! - [`render`]: the [`ChartRenderer`] trait each front end implements
//! - [`orchestrator`]: [`render_all`] and the [`Dashboard`] session
//! - [`config`]: container ids, base map URL and aggregation knobs

pub mod builders;
pub mod config;
pub mod orchestrator;
pub mod render;
pub mod spec;

pub use config::{ContainerIds, DashboardConfig};
pub use orchestrator::{render_all, Dashboard};
pub use render::ChartRenderer;
pub use spec::VegaLiteSpec;
