use pretty_assertions::assert_eq;
use shared_ui::Locale;

use crate::common;

#[test]
fn default_size_is_four_base_units() {
    let html = common::render_avatar(Some(common::make_user(Some("https://x/a.png"))), None, Locale::En);

    assert_eq!(
        common::attr_value(&html, "style"),
        Some("width: 32px; height: 32px;"),
        "html: {html}"
    );
}

#[test]
fn explicit_size_overrides_default() {
    let html = common::render_avatar(
        Some(common::make_user(None)),
        Some(10.0),
        Locale::En,
    );

    assert_eq!(
        common::attr_value(&html, "style"),
        Some("width: 10px; height: 10px;"),
        "html: {html}"
    );
}

#[test]
fn renders_image_when_avatar_present() {
    let html = common::render_avatar(Some(common::make_user(Some("https://x/a.png"))), None, Locale::En);

    assert!(html.contains(r#"src="https://x/a.png""#), "html: {html}");
    assert!(html.contains(r#"alt="user avatar""#), "html: {html}");
    assert!(html.contains(r#"data-has-image="true""#), "html: {html}");
    assert!(!html.contains("profile-initial"), "html: {html}");
}

#[test]
fn image_alt_is_localized() {
    let html = common::render_avatar(Some(common::make_user(Some("https://x/a.png"))), None, Locale::Es);

    assert!(html.contains(r#"alt="avatar del usuario""#), "html: {html}");
}

#[test]
fn missing_avatar_falls_back_to_initials() {
    let html = common::render_avatar(Some(common::make_user(None)), Some(10.0), Locale::En);

    assert!(html.contains("profile-initial"), "html: {html}");
    assert!(html.contains(">TH<"), "html: {html}");
    assert!(html.contains(r#"data-has-image="false""#), "html: {html}");
    assert!(!html.contains("<img"), "html: {html}");
}

#[test]
fn signed_out_session_renders_placeholder() {
    let html = common::render_avatar(None, None, Locale::En);

    assert!(html.contains("profile-initial"), "html: {html}");
    assert!(html.contains(">?<"), "html: {html}");
    assert!(!html.contains("<img"), "html: {html}");
}

#[test]
fn empty_avatar_string_still_renders_image() {
    // Presence is a null check, not a validity check.
    let html = common::render_avatar(Some(common::make_user(Some(""))), None, Locale::En);

    assert!(html.contains("<img"), "html: {html}");
    assert!(html.contains(r#"data-has-image="true""#), "html: {html}");
    assert!(!html.contains("profile-initial"), "html: {html}");
}

#[test]
fn forwards_attributes_to_container() {
    let html = common::render_attributed_avatar(Some(common::make_user(None)));

    assert!(html.contains(r#"id="site-avatar""#), "html: {html}");
    assert!(html.contains(r#"title="Account""#), "html: {html}");
    assert!(html.contains(r#"class="avatar""#), "html: {html}");
}
