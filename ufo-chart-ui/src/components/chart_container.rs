//! Titled chart container.
//!
//! The app shows [`LoadingSpinner`](super::LoadingSpinner) until the
//! dataset is in, so containers are only mounted once charts can render.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id Vega-Embed renders into
    pub id: String,
    /// Section title shown above the chart
    #[props(default = String::new())]
    pub title: String,
    /// Optional minimum height in pixels
    #[props(default = 320)]
    pub min_height: u32,
}

fn container_style(min_height: u32) -> String {
    format!("min-height: {}px; width: 100%;", min_height)
}

/// A titled div that one chart is embedded into.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = container_style(props.min_height);

    rsx! {
        div {
            style: "margin-bottom: 24px;",
            if !props.title.is_empty() {
                h4 {
                    style: "margin: 0 0 4px 0; font-size: 14px; color: #37474F;",
                    "{props.title}"
                }
            }
            div {
                id: "{props.id}",
                style: "{style}",
            }
        }
    }
}
