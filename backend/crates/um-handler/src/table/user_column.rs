use um_core::User;

/// Column of the users table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserColumn {
    /// Row number within the current page
    Ordinal,
    FirstName,
    LastName,
    Phone,
    Email,
    RoleId,
    /// Edit / delete buttons
    Action,
}

pub const DISPLAYED_COLUMNS: [UserColumn; 7] = [
    UserColumn::Ordinal,
    UserColumn::FirstName,
    UserColumn::LastName,
    UserColumn::Phone,
    UserColumn::Email,
    UserColumn::RoleId,
    UserColumn::Action,
];

impl UserColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ordinal => "ordinal",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::RoleId => "roleId",
            Self::Action => "action",
        }
    }

    /// Value the column sorts by; `None` for columns without data.
    pub fn sort_value<'a>(&self, user: &'a User) -> Option<&'a str> {
        match self {
            Self::FirstName => Some(&user.first_name),
            Self::LastName => Some(&user.last_name),
            Self::Phone => Some(&user.phone),
            Self::Email => Some(&user.email),
            Self::RoleId => Some(&user.role_id),
            Self::Ordinal | Self::Action => None,
        }
    }

    pub fn is_sortable(&self) -> bool {
        !matches!(self, Self::Ordinal | Self::Action)
    }
}
