use serde::{Deserialize, Serialize};

use super::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

impl Role {
    pub fn is_approver(&self) -> bool {
        matches!(self, Self::Admin | Self::Manager)
    }

    pub fn can_view_reports(&self) -> bool {
        self.is_approver()
    }
}

impl Category for Role {
    const ALL: &'static [Self] = &[Self::Admin, Self::Manager, Self::Employee];
    const KIND: &'static str = "role";

    fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Employee => "employee",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Manager => "Manager",
            Self::Employee => "Employee",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Admin => "#673AB7",
            Self::Manager => "#009688",
            Self::Employee => "#607D8B",
        }
    }
}
