//! Reusable Dioxus RSX components for the UFO dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod filtered_count;
mod loading_spinner;
mod state_selector;
mod year_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use filtered_count::FilteredCount;
pub use loading_spinner::LoadingSpinner;
pub use state_selector::StateSelector;
pub use year_selector::YearSelector;
