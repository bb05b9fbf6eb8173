use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    IO(String),
    Parse(String),
    UnsupportedDarkMode(String),
    DuplicateSlot {
        section: &'static str,
        name: String,
    },
    InvalidColorReference {
        slot: String,
        value: String,
    },
    InvalidBreakpoint {
        name: String,
        value: String,
    },
    UnorderedBreakpoints {
        name: String,
        previous: String,
    },
    EmptyFontFamily(String),
    UnknownSlot {
        section: &'static str,
        name: String,
    },
}

impl Display for TokenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::IO(msg) => write!(f, "I/O Error: {}", msg),
            TokenError::Parse(msg) => write!(f, "Parse Error: {}", msg),
            TokenError::UnsupportedDarkMode(value) =>
                write!(f, "Unsupported darkMode strategy '{}' (only 'class' is supported)", value),
            TokenError::DuplicateSlot { section, name } =>
                write!(f, "Duplicate {} slot name '{}'", section, name),
            TokenError::InvalidColorReference { slot, value } =>
                write!(f, "Color slot '{}' must be a var(--name) reference, got '{}'", slot, value),
            TokenError::InvalidBreakpoint { name, value } =>
                write!(f, "Breakpoint '{}' must be a pixel width like '768px', got '{}'", name, value),
            TokenError::UnorderedBreakpoints { name, previous } =>
                write!(f, "Breakpoint '{}' must be wider than '{}'", name, previous),
            TokenError::EmptyFontFamily(name) =>
                write!(f, "Font family '{}' has no font names", name),
            TokenError::UnknownSlot { section, name } =>
                write!(f, "Unknown {} slot name '{}'", section, name),
        }
    }
}

impl std::error::Error for TokenError {}

impl From<std::io::Error> for TokenError {
    fn from(error: std::io::Error) -> Self {
        TokenError::IO(error.to_string())
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(error: serde_json::Error) -> Self {
        TokenError::Parse(error.to_string())
    }
}
