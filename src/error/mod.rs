mod tokens;

pub use tokens::TokenError;
