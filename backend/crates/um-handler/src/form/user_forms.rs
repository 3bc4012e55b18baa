//! Standard registration and edit forms for the users screen.

use crate::form::form_control::FormControl;
use crate::form::form_group::FormGroup;
use crate::form::user_field::{CREATE_FIELDS, UserField};
use crate::form::validator::Validator;

use um_core::User;

const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_NAME_LENGTH: usize = 50;
const MAX_ADDRESS_LENGTH: usize = 100;
const MAX_STREET_NUMBER_LENGTH: usize = 10;
const MAX_POSTAL_CODE_LENGTH: usize = 10;
const MAX_PHONE_LENGTH: usize = 20;

fn validators_for(field: UserField) -> Vec<Validator> {
    use Validator::*;

    match field {
        UserField::RegisterEmail | UserField::Email => vec![Required, Email],
        UserField::RegisterPassword => vec![Required, MinLength(MIN_PASSWORD_LENGTH)],
        UserField::FirstName | UserField::LastName => vec![Required, MaxLength(MAX_NAME_LENGTH)],
        UserField::Street | UserField::City | UserField::Country => {
            vec![Required, MaxLength(MAX_ADDRESS_LENGTH)]
        }
        UserField::StreetNumber => vec![Required, MaxLength(MAX_STREET_NUMBER_LENGTH)],
        UserField::PostalCode => vec![Required, MaxLength(MAX_POSTAL_CODE_LENGTH)],
        UserField::DateOfBirth => vec![Required, Date],
        UserField::Phone => vec![Required, Phone, MaxLength(MAX_PHONE_LENGTH)],
        UserField::RoleName | UserField::RoleId => vec![Required],
    }
}

/// Empty registration form
pub fn create_form() -> FormGroup {
    CREATE_FIELDS
        .iter()
        .fold(FormGroup::new(), |form, field| {
            form.with_control(*field, FormControl::new(validators_for(*field)))
        })
}

/// Edit form pre-filled from `user`; every control starts pristine.
pub fn edit_form(user: &User) -> FormGroup {
    let values = [
        (UserField::Email, &user.email),
        (UserField::FirstName, &user.first_name),
        (UserField::LastName, &user.last_name),
        (UserField::Street, &user.street),
        (UserField::StreetNumber, &user.street_number),
        (UserField::City, &user.city),
        (UserField::PostalCode, &user.postal_code),
        (UserField::Country, &user.country),
        (UserField::DateOfBirth, &user.date_of_birth),
        (UserField::Phone, &user.phone),
        (UserField::RoleId, &user.role_id),
    ];

    values
        .into_iter()
        .fold(FormGroup::new(), |form, (field, value)| {
            form.with_control(
                field,
                FormControl::with_value(value.as_str(), validators_for(field)),
            )
        })
}
