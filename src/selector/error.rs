#[derive(Debug, Clone, PartialEq)]
pub enum SelectorError {
    MissingOnSelect,
    UnknownDefaultLanguage(String),
    InvalidWidth(f32),
}

impl std::fmt::Display for SelectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SelectorError::MissingOnSelect => {
                write!(f, "A language selector needs an on_select callback")
            }
            SelectorError::UnknownDefaultLanguage(code) => {
                write!(f, "Default language code '{}' is not a known language", code)
            }
            SelectorError::InvalidWidth(width) => {
                write!(f, "Selector width must be positive, got {}", width)
            }
        }
    }
}

impl std::error::Error for SelectorError {}
