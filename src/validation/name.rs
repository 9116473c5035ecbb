use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const MIN_NAME_CHARS: usize = 2;
pub const MAX_NAME_CHARS: usize = 100;

// \p{L} is exactly Lu|Ll|Lt|Lm|Lo; char::is_alphabetic would also let
// through Nl (Roman numerals) and circled letters. \s here is Unicode
// White_Space, matching str::trim.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\s]+$").unwrap());

/// Outcome of a name validation. An invalid name is a normal result,
/// not an error; callers must never turn it into a 4xx.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NameValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl NameValidationResult {
    fn valid(message: &str) -> Self {
        Self {
            is_valid: true,
            message: message.to_string(),
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            is_valid: false,
            message: message.to_string(),
        }
    }
}

/// Classifies a raw, untrimmed name. Checks run in order and the first
/// failing one decides the message: empty, then length, then charset.
/// Lengths count Unicode scalar values, not bytes.
pub fn validate_name(raw: &str) -> NameValidationResult {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return NameValidationResult::invalid("Name cannot be empty");
    }

    let char_count = trimmed.chars().count();

    if char_count < MIN_NAME_CHARS {
        return NameValidationResult::invalid("Name must be at least 2 characters long");
    }

    if char_count > MAX_NAME_CHARS {
        return NameValidationResult::invalid("Name cannot exceed 100 characters");
    }

    // letters from any script, so "Björn" and "Αλέξανδρος" pass while
    // "John123" fails
    if NAME_PATTERN.is_match(trimmed) {
        NameValidationResult::valid("Name is valid")
    } else {
        NameValidationResult::invalid("Name can only contain letters and spaces")
    }
}
