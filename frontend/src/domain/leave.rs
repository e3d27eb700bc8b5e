//! Leave request vocabulary and the approval workflow.
//!
//! Approval is two-staged: a manager acts on `pending` requests, an admin
//! gives the final decision on `manager-approved` ones. Either stage may
//! reject. The predicates here are the single source for which action
//! buttons a page shows.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Category, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaveStatus {
    Pending,
    ManagerApproved,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl Category for LeaveStatus {
    const ALL: &'static [Self] = &[
        Self::Pending,
        Self::ManagerApproved,
        Self::Approved,
        Self::Rejected,
    ];
    const KIND: &'static str = "leave status";

    fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::ManagerApproved => "manager-approved",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::ManagerApproved => "Manager approved",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Pending => "#FFC107",
            Self::ManagerApproved => "#03A9F4",
            Self::Approved => "#4CAF50",
            Self::Rejected => "#F44336",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaveType {
    #[default]
    Annual,
    Sick,
    Personal,
    Unpaid,
    Other,
}

impl Category for LeaveType {
    const ALL: &'static [Self] = &[
        Self::Annual,
        Self::Sick,
        Self::Personal,
        Self::Unpaid,
        Self::Other,
    ];
    const KIND: &'static str = "leave type";

    fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Sick => "sick",
            Self::Personal => "personal",
            Self::Unpaid => "unpaid",
            Self::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Annual => "Annual leave",
            Self::Sick => "Sick leave",
            Self::Personal => "Personal leave",
            Self::Unpaid => "Unpaid leave",
            Self::Other => "Other",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Annual => "#3F51B5",
            Self::Sick => "#E91E63",
            Self::Personal => "#00BCD4",
            Self::Unpaid => "#795548",
            Self::Other => "#9E9E9E",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("This request is already {} and can no longer change.", .0.label().to_lowercase())]
    Terminal(LeaveStatus),
    #[error("A pending request must be approved by a manager before final approval.")]
    RequiresManagerApproval,
    #[error("The request is already {}.", .0.label().to_lowercase())]
    Unchanged(LeaveStatus),
    #[error("{} users cannot move a {} request to {}.", .role.label(), .from.label().to_lowercase(), .to.label().to_lowercase())]
    NotPermitted {
        role: Role,
        from: LeaveStatus,
        to: LeaveStatus,
    },
}

pub fn can_transition(role: Role, current: LeaveStatus, target: LeaveStatus) -> bool {
    check_transition(role, current, target).is_ok()
}

/// Validates a status change and returns the new status, or the guard message
/// explaining why the change is refused.
pub fn check_transition(
    role: Role,
    current: LeaveStatus,
    target: LeaveStatus,
) -> Result<LeaveStatus, TransitionError> {
    use LeaveStatus::*;

    if current.is_terminal() {
        return Err(TransitionError::Terminal(current));
    }
    if current == target {
        return Err(TransitionError::Unchanged(current));
    }
    let allowed = match (role, current, target) {
        (Role::Manager, Pending, ManagerApproved) | (Role::Manager, Pending, Rejected) => true,
        (Role::Admin, ManagerApproved, Approved) | (Role::Admin, ManagerApproved, Rejected) => {
            true
        }
        (Role::Admin, Pending, Approved) => return Err(TransitionError::RequiresManagerApproval),
        _ => false,
    };
    if allowed {
        Ok(target)
    } else {
        Err(TransitionError::NotPermitted {
            role,
            from: current,
            to: target,
        })
    }
}

/// Targets offered to `role` for a request currently in `current`, in button
/// order.
pub fn available_transitions(role: Role, current: LeaveStatus) -> Vec<LeaveStatus> {
    LeaveStatus::ALL
        .iter()
        .copied()
        .filter(|target| can_transition(role, current, *target))
        .collect()
}

/// Requesters may withdraw their own request until a final decision.
pub fn can_cancel(is_requester: bool, current: LeaveStatus) -> bool {
    is_requester && !current.is_terminal()
}
