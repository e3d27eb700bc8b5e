use serde::{Deserialize, Serialize};

use super::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Leave,
}

impl Category for AttendanceStatus {
    const ALL: &'static [Self] = &[Self::Present, Self::Absent, Self::Late, Self::Leave];
    const KIND: &'static str = "attendance status";

    fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
            Self::Leave => "leave",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
            Self::Leave => "On leave",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Present => "#4CAF50",
            Self::Absent => "#F44336",
            Self::Late => "#FF9800",
            Self::Leave => "#2196F3",
        }
    }
}
