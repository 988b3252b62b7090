//! Placeholder while the sightings CSV is fetched and parsed.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "padding: 40px; text-align: center; color: #78909C; font-style: italic;",
            "Fetching sighting reports\u{2026}"
        }
    }
}
