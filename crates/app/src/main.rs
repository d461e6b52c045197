use dioxus::prelude::*;
use shared_types::UserProfile;
use shared_ui::{use_i18n, use_session, Avatar, I18nState, Locale, SessionState};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SessionState::new);
    use_context_provider(I18nState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Header {}
        main {
            class: "app-main",
            p { "Select an account action from the header." }
        }
    }
}

/// Fixed profile installed by the stub sign-in. The session backend
/// is owned by the host platform; this shell only drives the signals.
fn demo_user() -> UserProfile {
    UserProfile {
        id: 1,
        username: "thorne".into(),
        display_name: "Tess Horne".into(),
        email: "tess@example.com".into(),
        avatar: None,
    }
}

#[component]
fn Header() -> Element {
    let mut session = use_session();
    let mut i18n = use_i18n();

    let display_name = session
        .current_user
        .read()
        .as_ref()
        .map(|user| user.display_name.clone());
    let locale = *i18n.locale.read();

    rsx! {
        header {
            class: "app-header",
            span { class: "app-title", "Console" }

            div {
                class: "app-header-user",

                button {
                    class: "header-button",
                    onclick: move |_| {
                        let next = match *i18n.locale.read() {
                            Locale::En => Locale::Es,
                            Locale::Es => Locale::En,
                        };
                        i18n.set_locale(next);
                    },
                    {locale.display_name()}
                }

                Avatar {}

                if let Some(name) = display_name {
                    span { class: "header-user-name", "{name}" }
                }

                if session.is_authenticated() {
                    button {
                        class: "header-button",
                        onclick: move |_| {
                            tracing::info!("signing out");
                            session.clear();
                        },
                        {i18n.format_message("session.sign_out", "Sign out")}
                    }
                } else {
                    button {
                        class: "header-button",
                        onclick: move |_| {
                            let user = demo_user();
                            tracing::info!(username = %user.username, "signing in");
                            session.set_user(user);
                        },
                        {i18n.format_message("session.sign_in", "Sign in")}
                    }
                }
            }
        }
    }
}
