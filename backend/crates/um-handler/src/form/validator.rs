use um_core::normalize_date_of_birth;

/// Rule applied to a control value.
///
/// Only `Required` rejects an empty value; every other rule passes on empty
/// input so optional fields can still carry format checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Required,
    Email,
    MinLength(usize),
    MaxLength(usize),
    /// Digits with optional `+`, spaces and dashes
    Phone,
    /// Anything `normalize_date_of_birth` accepts
    Date,
}

impl Validator {
    pub fn check(&self, value: &str) -> bool {
        if value.is_empty() {
            return !matches!(self, Self::Required);
        }

        match self {
            Self::Required => !value.trim().is_empty(),
            Self::Email => is_email(value),
            Self::MinLength(min) => value.chars().count() >= *min,
            Self::MaxLength(max) => value.chars().count() <= *max,
            Self::Phone => is_phone(value),
            Self::Date => normalize_date_of_birth(value).is_ok(),
        }
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

fn is_phone(value: &str) -> bool {
    let mut digits = 0;
    for (i, c) in value.chars().enumerate() {
        match c {
            '0'..='9' => digits += 1,
            '+' if i == 0 => {}
            ' ' | '-' => {}
            _ => return false,
        }
    }
    digits > 0
}
