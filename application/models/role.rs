use serde::Serialize;
use std::fmt;

/// Application roles, named after the user pool groups that grant them.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Auditors,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Auditors];

    pub fn group_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Auditors => "Auditors",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group_name())
    }
}
