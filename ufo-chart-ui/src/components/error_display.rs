//! Load failure banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

fn banner_text(message: &str) -> String {
    format!(
        "The bundled sightings data could not be parsed ({}). No charts are shown.",
        message.trim_end_matches('.')
    )
}

/// Shown in place of the selectors and charts when the dataset fails to parse.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let text = banner_text(&props.message);
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFF3E0; color: #BF360C; border-left: 4px solid #FF7043;",
            "{text}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_wraps_cause() {
        assert_eq!(
            banner_text("CSV error: record 3 (line 4): found record with 2 fields."),
            "The bundled sightings data could not be parsed \
             (CSV error: record 3 (line 4): found record with 2 fields). No charts are shown."
        );
    }
}
