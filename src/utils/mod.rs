pub mod theme_state;
pub mod theme_store;
pub mod root_marker;

pub use theme_state::{ ThemeMode, ThemeState, DARK_MODE_CLASS };
pub use theme_store::{ Subscription, ThemeStore };
pub use root_marker::apply_root_marker;
