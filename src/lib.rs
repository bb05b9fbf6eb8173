pub mod views;
pub mod utils;
pub mod configs;
pub mod error;
mod routes;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::{ active_tokens, default_tokens, DesignTokens };
pub use crate::error::TokenError;
