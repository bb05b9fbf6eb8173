pub mod design_tokens;
pub mod env_validate;

pub use design_tokens::{
    default_tokens,
    Breakpoint,
    ColorSlot,
    DarkModeStrategy,
    DesignTokens,
    FontFamily,
    SlotScope,
};
pub use env_validate::{ active_tokens, load_design_tokens, tokens_from_source, TOKENS_PATH_VAR };
