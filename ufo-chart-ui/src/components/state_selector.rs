//! Dropdown selector for the state filter.

use crate::state::AppState;
use dioxus::prelude::*;
use ufo_data::FilterChange;

/// State dropdown. Options come from the full dataset, "All" first.
#[component]
pub fn StateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let choices = state.options.read().state_choices();
    let selected = state.filter.read().state().to_string();

    let on_change = move |evt: Event<FormData>| {
        state.apply_filter(FilterChange::state(&evt.value()));
    };

    rsx! {
        label {
            r#for: "state-select",
            style: "font-weight: bold; margin-right: 8px;",
            "State: "
        }
        select {
            id: "state-select",
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
