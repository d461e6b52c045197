use dioxus::prelude::*;
use shared_types::UserProfile;

/// Current-session state shared across the UI.
///
/// Provided as context by the host application; components read the
/// signal and re-render when the signed-in user changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current_user: Signal<Option<UserProfile>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: UserProfile) {
        self.current_user.set(Some(user));
    }

    pub fn clear(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
