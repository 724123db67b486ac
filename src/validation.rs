//! Node name validation.
//!
//! A valid name consists of Latin or Cyrillic letters, ASCII digits and single
//! spaces between words, and must not occur anywhere in the path it is placed
//! under. Names are never normalized; validation is a pure predicate.

use thiserror::Error;

/// The rule a rejected name broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameRule {
    #[error("name is empty")]
    Empty,
    #[error("name must start with a letter or digit, found {0:?}")]
    LeadingCharacter(char),
    #[error("character {0:?} is not allowed")]
    Character(char),
    #[error("consecutive spaces are not allowed")]
    DoubleSpace,
    #[error("trailing space is not allowed")]
    TrailingSpace,
    #[error("name occurs in its own path")]
    OccursInPath,
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, 'А'..='я' | 'Ё' | 'ё')
}

fn is_readable(c: char) -> bool {
    is_letter(c) || c.is_ascii_digit()
}

/// Check `name` against every rule, in order, reporting the first failure.
pub fn validate(name: &str, path: &str) -> Result<(), NameRule> {
    let first = name.chars().next().ok_or(NameRule::Empty)?;
    if !is_readable(first) {
        return Err(NameRule::LeadingCharacter(first));
    }

    let mut prev_space = false;
    for c in name.chars() {
        if is_readable(c) {
            prev_space = false;
        } else if c == ' ' {
            if prev_space {
                return Err(NameRule::DoubleSpace);
            }
            prev_space = true;
        } else {
            return Err(NameRule::Character(c));
        }
    }
    if prev_space {
        return Err(NameRule::TrailingSpace);
    }

    // Rename cascades rewrite paths by matching the name textually.
    if path.contains(name) {
        return Err(NameRule::OccursInPath);
    }
    Ok(())
}

/// Whether `name` may be placed under `path`.
pub fn is_valid(name: &str, path: &str) -> bool {
    validate(name, path).is_ok()
}
