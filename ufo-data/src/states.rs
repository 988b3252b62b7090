//! US state code → full name normalization.
//!
//! The raw export stores lower-case two-letter codes (`tx`, `ca`). The
//! `normalize-states` command rewrites them to full names for display; values
//! that are not a known code pass through untouched.

/// Full name for a two-letter code (case-insensitive), covering the 50
/// states, the District of Columbia and Puerto Rico.
pub fn full_state_name(code: &str) -> Option<&'static str> {
    let name = match code.trim().to_ascii_lowercase().as_str() {
        "al" => "Alabama",
        "ak" => "Alaska",
        "az" => "Arizona",
        "ar" => "Arkansas",
        "ca" => "California",
        "co" => "Colorado",
        "ct" => "Connecticut",
        "de" => "Delaware",
        "dc" => "District of Columbia",
        "fl" => "Florida",
        "ga" => "Georgia",
        "hi" => "Hawaii",
        "ia" => "Iowa",
        "id" => "Idaho",
        "il" => "Illinois",
        "in" => "Indiana",
        "ks" => "Kansas",
        "ky" => "Kentucky",
        "la" => "Louisiana",
        "ma" => "Massachusetts",
        "md" => "Maryland",
        "me" => "Maine",
        "mi" => "Michigan",
        "mn" => "Minnesota",
        "mo" => "Missouri",
        "ms" => "Mississippi",
        "mt" => "Montana",
        "nc" => "North Carolina",
        "nd" => "North Dakota",
        "ne" => "Nebraska",
        "nh" => "New Hampshire",
        "nj" => "New Jersey",
        "nm" => "New Mexico",
        "nv" => "Nevada",
        "ny" => "New York",
        "oh" => "Ohio",
        "ok" => "Oklahoma",
        "or" => "Oregon",
        "pa" => "Pennsylvania",
        "pr" => "Puerto Rico",
        "ri" => "Rhode Island",
        "sc" => "South Carolina",
        "sd" => "South Dakota",
        "tn" => "Tennessee",
        "tx" => "Texas",
        "ut" => "Utah",
        "va" => "Virginia",
        "vt" => "Vermont",
        "wa" => "Washington",
        "wi" => "Wisconsin",
        "wv" => "West Virginia",
        "wy" => "Wyoming",
        _ => return None,
    };
    Some(name)
}

/// Full name for a known code, otherwise the value unchanged.
pub fn normalize_state(value: &str) -> String {
    full_state_name(value)
        .map(String::from)
        .unwrap_or_else(|| value.to_string())
}
