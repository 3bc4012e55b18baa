//! Field keys of the user registration and edit forms.

/// A control in one of the user forms.
///
/// Registration uses its own email/password controls so they can carry
/// stricter validators than the edit form's email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserField {
    RegisterEmail,
    RegisterPassword,
    Email,
    FirstName,
    LastName,
    Street,
    StreetNumber,
    City,
    PostalCode,
    Country,
    DateOfBirth,
    Phone,
    RoleName,
    RoleId,
}

/// Controls of the registration form, every one tracked for readiness.
pub const CREATE_FIELDS: [UserField; 12] = [
    UserField::RegisterEmail,
    UserField::RegisterPassword,
    UserField::FirstName,
    UserField::LastName,
    UserField::Street,
    UserField::StreetNumber,
    UserField::City,
    UserField::PostalCode,
    UserField::Country,
    UserField::DateOfBirth,
    UserField::Phone,
    UserField::RoleName,
];

/// Controls read from the edit form when assembling the updated record.
pub const EDIT_FIELDS: [UserField; 11] = [
    UserField::Email,
    UserField::FirstName,
    UserField::LastName,
    UserField::Street,
    UserField::StreetNumber,
    UserField::City,
    UserField::PostalCode,
    UserField::Country,
    UserField::DateOfBirth,
    UserField::Phone,
    UserField::RoleId,
];

/// Edit controls whose validity gates submission. The email is read-only
/// in the edit view and is not checked.
pub const EDIT_VALIDATED_FIELDS: [UserField; 10] = [
    UserField::FirstName,
    UserField::LastName,
    UserField::Phone,
    UserField::Street,
    UserField::StreetNumber,
    UserField::City,
    UserField::Country,
    UserField::PostalCode,
    UserField::DateOfBirth,
    UserField::RoleId,
];

impl UserField {
    /// Control name used by the presentation layer
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RegisterEmail => "registerEmail",
            Self::RegisterPassword => "registerPassword",
            Self::Email => "email",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Street => "street",
            Self::StreetNumber => "streetNumber",
            Self::City => "city",
            Self::PostalCode => "postalCode",
            Self::Country => "country",
            Self::DateOfBirth => "dateOfBirth",
            Self::Phone => "phone",
            Self::RoleName => "roleName",
            Self::RoleId => "roleId",
        }
    }
}

impl std::fmt::Display for UserField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
