pub mod components;
pub mod i18n;
pub mod session;
pub mod theme;

pub use components::*;
pub use i18n::*;
pub use session::*;
pub use theme::*;
