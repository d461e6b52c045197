use dioxus::prelude::*;
use shared_types::UserProfile;

/// Shown when there is no letter to derive an initial from.
const PLACEHOLDER: &str = "?";

/// Initials badge rendered in place of a missing avatar image.
///
/// Accepts a missing profile (signed-out session) and renders the
/// placeholder glyph in that case.
#[component]
pub fn ProfileInitial(
    #[props(!optional)] profile: Option<UserProfile>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let initial = initials_for(profile.as_ref());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "profile-initial",
            ..attributes,
            "{initial}"
        }
    }
}

/// Up to two uppercase initials from the display name words, falling
/// back to the first letter of the username.
fn initials_for(profile: Option<&UserProfile>) -> String {
    let Some(profile) = profile else {
        return PLACEHOLDER.to_string();
    };

    let initials = profile
        .display_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();
    if !initials.is_empty() {
        return initials;
    }

    profile
        .username
        .chars()
        .next()
        .map(|letter| letter.to_uppercase().collect::<String>())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}
