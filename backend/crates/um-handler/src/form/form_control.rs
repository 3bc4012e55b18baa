use crate::form::validator::Validator;

/// State of one form input.
///
/// `dirty` follows user edits only: programmatic [`FormControl::set_value`]
/// leaves it alone, [`FormControl::input`] sets it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormControl {
    value: String,
    touched: bool,
    dirty: bool,
    validators: Vec<Validator>,
}

impl FormControl {
    pub fn new(validators: Vec<Validator>) -> Self {
        Self {
            validators,
            ..Default::default()
        }
    }

    /// Pristine control pre-filled with `value`
    pub fn with_value<S: Into<String>>(value: S, validators: Vec<Validator>) -> Self {
        Self {
            value: value.into(),
            validators,
            ..Default::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_valid(&self) -> bool {
        self.validators.iter().all(|v| v.check(&self.value))
    }

    /// Validators the current value fails
    pub fn errors(&self) -> Vec<Validator> {
        self.validators
            .iter()
            .filter(|v| !v.check(&self.value))
            .copied()
            .collect()
    }

    /// Programmatic update
    pub fn set_value<S: Into<String>>(&mut self, value: S) {
        self.value = value.into();
    }

    /// Update coming from the user typing into the input
    pub fn input<S: Into<String>>(&mut self, value: S) {
        self.value = value.into();
        self.dirty = true;
    }

    pub fn mark_as_touched(&mut self) {
        self.touched = true;
    }

    /// Empty value, untouched and pristine. Validators are kept.
    pub fn reset(&mut self) {
        self.value.clear();
        self.touched = false;
        self.dirty = false;
    }
}
