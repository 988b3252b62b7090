//! Dropdown selector for the year filter.

use crate::state::AppState;
use dioxus::prelude::*;
use ufo_data::FilterChange;

/// Year dropdown. Options come from the full dataset, "All" first.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let choices = state.options.read().year_choices();
    let selected = state.filter.read().year().to_string();

    let on_change = move |evt: Event<FormData>| match FilterChange::year(&evt.value()) {
        Ok(change) => state.apply_filter(change),
        Err(e) => log::warn!("[UFO] year selector: {}", e),
    };

    rsx! {
        label {
            r#for: "year-select",
            style: "font-weight: bold; margin: 0 8px 0 16px;",
            "Year: "
        }
        select {
            id: "year-select",
            onchange: on_change,
            for choice in choices.iter() {
                option {
                    value: "{choice}",
                    selected: *choice == selected,
                    "{choice}"
                }
            }
        }
    }
}
