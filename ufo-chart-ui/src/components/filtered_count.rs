//! Filtered record count label.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FilteredCountProps {
    /// DOM id the renderer writes the count into
    pub id: String,
}

/// "Sightings shown: N". The number is written by the render queue, not by
/// Dioxus, so it always matches the charts currently on screen.
#[component]
pub fn FilteredCount(props: FilteredCountProps) -> Element {
    rsx! {
        div {
            style: "margin: 8px 0; font-size: 14px;",
            "Sightings shown: "
            strong {
                id: "{props.id}",
            }
        }
    }
}
