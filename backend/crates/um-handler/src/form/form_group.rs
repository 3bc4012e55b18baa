use crate::form::form_control::FormControl;
use crate::form::user_field::UserField;
use crate::{HandlerError, HandlerResult};

use std::collections::BTreeMap;

/// Named set of controls making up one form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormGroup {
    controls: BTreeMap<UserField, FormControl>,
}

impl FormGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion
    pub fn with_control(mut self, field: UserField, control: FormControl) -> Self {
        self.controls.insert(field, control);
        self
    }

    pub fn control_mut(&mut self, field: UserField) -> Option<&mut FormControl> {
        self.controls.get_mut(&field)
    }

    /// Value of `field`, or an error when the form has no such control
    #[track_caller]
    pub fn value(&self, field: UserField) -> HandlerResult<&str> {
        match self.controls.get(&field) {
            Some(control) => Ok(control.value()),
            None => Err(HandlerError::missing_field(field)),
        }
    }

    /// Simulate the user typing into `field` and leaving it
    pub fn fill(&mut self, field: UserField, value: &str) -> HandlerResult<()> {
        let control = self
            .controls
            .get_mut(&field)
            .ok_or_else(|| HandlerError::missing_field(field))?;
        control.input(value);
        control.mark_as_touched();
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.controls.values().all(FormControl::is_valid)
    }

    /// True when every listed control exists and satisfies `check`
    pub fn all_satisfy<F>(&self, fields: &[UserField], check: F) -> bool
    where
        F: Fn(&FormControl) -> bool,
    {
        fields
            .iter()
            .all(|field| self.controls.get(field).is_some_and(&check))
    }

    pub fn mark_all_as_touched(&mut self) {
        self.controls
            .values_mut()
            .for_each(FormControl::mark_as_touched);
    }

    /// Reset every control to empty, untouched and pristine
    pub fn reset(&mut self) {
        self.controls.values_mut().for_each(FormControl::reset);
    }
}
