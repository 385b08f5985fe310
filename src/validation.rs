//! Player name validation

/// Longest name accepted, in characters.
pub const MAX_NAME_CHARS: usize = 30;

/// Name validation errors with helpful messages
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("Please enter a name!")]
    Empty,

    #[error("That name is too long (maximum {max} characters)")]
    TooLong { max: usize },

    #[error("Name contains invalid characters: {chars}")]
    InvalidCharacters { chars: String },
}

/// Validate a character name and return it trimmed.
///
/// Any printable text is accepted, including spaces and non-ASCII letters.
pub fn validate_player_name(name: &str) -> Result<String, NameError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    if trimmed.chars().count() > MAX_NAME_CHARS {
        return Err(NameError::TooLong {
            max: MAX_NAME_CHARS,
        });
    }

    if trimmed.chars().any(|c| c.is_control()) {
        let control_chars: String = trimmed
            .chars()
            .filter(|c| c.is_control())
            .map(|c| format!("\\u{{{:04x}}}", c as u32))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(NameError::InvalidCharacters {
            chars: control_chars,
        });
    }

    Ok(trimmed.to_string())
}
