//! Closed vocabularies shared by the API layer, the report pipeline and the
//! pages. Wire values stay plain strings on the DTOs; these enums are built
//! from them where a decision or a label is needed.

pub mod attendance;
pub mod leave;
pub mod role;
pub mod task;

pub use attendance::AttendanceStatus;
pub use leave::{LeaveStatus, LeaveType, TransitionError};
pub use role::Role;
pub use task::{TaskPriority, TaskStatus};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: \"{value}\"")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// A fixed category set with an exhaustive key/label/colour mapping.
pub trait Category: Copy + Eq + std::fmt::Debug + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];
    const KIND: &'static str;

    fn as_str(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn color(&self) -> &'static str;

    fn parse(raw: &str) -> Result<Self, UnknownVariant> {
        let needle = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownVariant {
                kind: Self::KIND,
                value: raw.to_string(),
            })
    }
}
