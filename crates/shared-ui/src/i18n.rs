use dioxus::prelude::*;

/// Locales the UI ships message catalogs for.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

/// All available locales in display order.
pub const ALL_LOCALES: &[Locale] = &[Locale::En, Locale::Es];

const MESSAGES_EN: &[(&str, &str)] = &[
    ("avatar.image_alt", "user avatar"),
    ("session.sign_in", "Sign in"),
    ("session.sign_out", "Sign out"),
];

const MESSAGES_ES: &[(&str, &str)] = &[
    ("avatar.image_alt", "avatar del usuario"),
    ("session.sign_in", "Iniciar sesión"),
    ("session.sign_out", "Cerrar sesión"),
];

impl Locale {
    /// Internal key used for storage and Select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    /// Parse a locale key string, falling back to English.
    pub fn from_key(s: &str) -> Self {
        match s {
            "es" => Locale::Es,
            _ => Locale::En,
        }
    }

    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => MESSAGES_EN,
            Locale::Es => MESSAGES_ES,
        }
    }

    /// Look up a catalog message by id.
    pub fn message(&self, id: &str) -> Option<&'static str> {
        self.messages()
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, message)| *message)
    }
}

/// Localization state shared across the UI.
///
/// Components resolve user-facing strings through [`format_message`]
/// so a locale switch re-renders them in place.
///
/// [`format_message`]: I18nState::format_message
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct I18nState {
    pub locale: Signal<Locale>,
}

impl I18nState {
    pub fn new() -> Self {
        Self {
            locale: Signal::new(Locale::default()),
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale.set(locale);
    }

    /// Resolve a message id against the active locale's catalog.
    ///
    /// Ids missing from the catalog fall back to `default_message`.
    pub fn format_message(&self, id: &str, default_message: &str) -> String {
        self.locale
            .read()
            .message(id)
            .unwrap_or(default_message)
            .to_string()
    }
}

/// Hook to access localization state.
pub fn use_i18n() -> I18nState {
    use_context::<I18nState>()
}
