//! Open/close state machine for payroll years and periods.
//!
//! Both record kinds share the `{open, close}` shape. Transitions are looked
//! up in [`TRANSITIONS`]; a missing row means the event is not allowed from
//! the current state. Guards are evaluated by the calendar manager, which has
//! the sibling data they need.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HrError, HrResult};
use crate::models::CalendarState;

/// The kind of calendar record a transition applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarEntity {
    /// A payroll year.
    Year,
    /// A payroll period.
    Period,
}

impl CalendarEntity {
    /// Returns the label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            CalendarEntity::Year => "payroll year",
            CalendarEntity::Period => "payroll period",
        }
    }
}

/// A user-triggered lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarEvent {
    /// `open -> close`.
    Close,
    /// `close -> open`.
    Reopen,
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarEvent::Close => f.write_str("close"),
            CalendarEvent::Reopen => f.write_str("reopen"),
        }
    }
}

/// Precondition attached to a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// No earlier period of the same year may still be open.
    EarlierPeriodsClosed,
}

/// Side effect applied after a transition succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cascade {
    /// Close every still-open period of the year.
    CloseChildPeriods,
    /// Reopen the parent year.
    ReopenParentYear,
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The record kind.
    pub entity: CalendarEntity,
    /// Required current state.
    pub from: CalendarState,
    /// The triggering event.
    pub event: CalendarEvent,
    /// Resulting state.
    pub to: CalendarState,
    /// Precondition, if any.
    pub guard: Option<Guard>,
    /// Follow-up write, if any.
    pub cascade: Option<Cascade>,
}

/// Every allowed calendar transition.
///
/// Closing cascades down (year closes its periods); reopening a period
/// cascades up (its year reopens); reopening a year does not touch periods.
pub const TRANSITIONS: [Transition; 4] = [
    Transition {
        entity: CalendarEntity::Year,
        from: CalendarState::Open,
        event: CalendarEvent::Close,
        to: CalendarState::Close,
        guard: None,
        cascade: Some(Cascade::CloseChildPeriods),
    },
    Transition {
        entity: CalendarEntity::Year,
        from: CalendarState::Close,
        event: CalendarEvent::Reopen,
        to: CalendarState::Open,
        guard: None,
        cascade: None,
    },
    Transition {
        entity: CalendarEntity::Period,
        from: CalendarState::Open,
        event: CalendarEvent::Close,
        to: CalendarState::Close,
        guard: Some(Guard::EarlierPeriodsClosed),
        cascade: None,
    },
    Transition {
        entity: CalendarEntity::Period,
        from: CalendarState::Close,
        event: CalendarEvent::Reopen,
        to: CalendarState::Open,
        guard: None,
        cascade: Some(Cascade::ReopenParentYear),
    },
];

/// Looks up the transition for `event` on a record in `state`.
///
/// # Errors
///
/// Returns [`HrError::InvalidTransition`] when the table has no matching row.
pub fn transition(
    entity: CalendarEntity,
    name: &str,
    state: CalendarState,
    event: CalendarEvent,
) -> HrResult<Transition> {
    TRANSITIONS
        .iter()
        .find(|t| t.entity == entity && t.from == state && t.event == event)
        .copied()
        .ok_or_else(|| HrError::InvalidTransition {
            entity: entity.label(),
            name: name.to_string(),
            state: state.to_string(),
            event: event.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_open_year_cascades_to_periods() {
        let t = transition(
            CalendarEntity::Year,
            "FY 2024",
            CalendarState::Open,
            CalendarEvent::Close,
        )
        .unwrap();
        assert_eq!(t.to, CalendarState::Close);
        assert_eq!(t.cascade, Some(Cascade::CloseChildPeriods));
        assert!(t.guard.is_none());
    }

    #[test]
    fn test_reopen_year_has_no_cascade() {
        let t = transition(
            CalendarEntity::Year,
            "FY 2024",
            CalendarState::Close,
            CalendarEvent::Reopen,
        )
        .unwrap();
        assert_eq!(t.to, CalendarState::Open);
        assert!(t.cascade.is_none());
    }

    #[test]
    fn test_close_period_is_guarded() {
        let t = transition(
            CalendarEntity::Period,
            "01-2024",
            CalendarState::Open,
            CalendarEvent::Close,
        )
        .unwrap();
        assert_eq!(t.guard, Some(Guard::EarlierPeriodsClosed));
    }

    #[test]
    fn test_reopen_period_reopens_year() {
        let t = transition(
            CalendarEntity::Period,
            "01-2024",
            CalendarState::Close,
            CalendarEvent::Reopen,
        )
        .unwrap();
        assert_eq!(t.cascade, Some(Cascade::ReopenParentYear));
    }

    #[test]
    fn test_closing_closed_record_is_rejected() {
        let err = transition(
            CalendarEntity::Period,
            "01-2024",
            CalendarState::Close,
            CalendarEvent::Close,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Can not close payroll period '01-2024' in state 'close'"
        );
    }

    #[test]
    fn test_reopening_open_year_is_rejected() {
        assert!(
            transition(
                CalendarEntity::Year,
                "FY 2024",
                CalendarState::Open,
                CalendarEvent::Reopen,
            )
            .is_err()
        );
    }
}
