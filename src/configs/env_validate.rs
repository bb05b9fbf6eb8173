use crate::error::TokenError;
use super::design_tokens::{ default_tokens, DesignTokens };

pub const TOKENS_PATH_VAR: &str = "THEME_TOKENS_PATH";

lazy_static::lazy_static! {
    static ref ACTIVE_TOKENS: Result<DesignTokens, TokenError> = load_design_tokens();
}

/// Token table for this process, resolved once from the environment.
pub fn active_tokens() -> Result<&'static DesignTokens, TokenError> {
    ACTIVE_TOKENS.as_ref().map_err(|e| e.clone())
}

pub fn load_design_tokens() -> Result<DesignTokens, TokenError> {
    tokens_from_source(std::env::var(TOKENS_PATH_VAR).ok())
}

pub fn tokens_from_source(path: Option<String>) -> Result<DesignTokens, TokenError> {
    match path.filter(|path| !path.trim().is_empty()) {
        Some(path) => {
            log::info!("Loading design tokens from {}", path);
            let tokens = DesignTokens::from_path(&path).map_err(|e| {
                log::error!("Invalid design token file {}: {}", path, e);
                e
            })?;
            log::info!(
                "Loaded {} color slots, {} font families, {} breakpoints",
                tokens.colors().len(),
                tokens.font_families().len(),
                tokens.breakpoints().len()
            );
            Ok(tokens)
        }
        None => {
            log::info!("{} not set, using built-in design tokens", TOKENS_PATH_VAR);
            Ok(default_tokens().clone())
        }
    }
}
