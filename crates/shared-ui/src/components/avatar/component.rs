use dioxus::prelude::*;

use crate::components::profile_initial::ProfileInitial;
use crate::i18n::use_i18n;
use crate::session::use_session;
use crate::theme::size_units;

/// Avatars default to four base size units per edge.
const DEFAULT_SIZE_UNITS: f64 = 4.0;

/// The signed-in user's avatar image, or their initials when no image
/// has been uploaded.
///
/// Presence is judged by the null check alone; the URL itself is not
/// validated. Extra attributes are forwarded to the container.
#[component]
pub fn Avatar(
    size: Option<f64>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let i18n = use_i18n();
    let session = use_session();

    let current_user = session.current_user.read().clone();
    let avatar = current_user.as_ref().and_then(|user| user.avatar.clone());

    let size = size.unwrap_or(size_units(DEFAULT_SIZE_UNITS));
    let has_image = avatar.is_some();
    let alt = i18n.format_message("avatar.image_alt", "user avatar");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "avatar",
            "data-has-image": "{has_image}",
            style: "width: {size}px; height: {size}px;",
            ..attributes,
            if let Some(src) = avatar {
                img {
                    class: "avatar-image",
                    src: src,
                    alt: alt,
                }
            } else {
                ProfileInitial { profile: current_user }
            }
        }
    }
}
