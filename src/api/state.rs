//! Application state for the HR payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calendar::PayrollCalendar;
use crate::clock::{Clock, SystemClock};
use crate::config::ConfigLoader;
use crate::personnel::{LeaveLedger, PersonnelDirectory, PrefixedSequence, TransferDesk};
use crate::store::{InMemoryCalendarStore, InMemoryPersonnelStore};

/// Shared application state.
///
/// Holds the services built over the in-memory stores, the loaded
/// configuration, and the clock that decides what "today" is.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    clock: Arc<dyn Clock>,
    calendar: Arc<PayrollCalendar<InMemoryCalendarStore>>,
    directory: Arc<PersonnelDirectory<InMemoryPersonnelStore>>,
    ledger: Arc<LeaveLedger<InMemoryCalendarStore, InMemoryPersonnelStore>>,
    transfers: Arc<TransferDesk<InMemoryPersonnelStore>>,
}

impl AppState {
    /// Creates a new application state using the wall clock at the
    /// configured timezone offset.
    pub fn new(config: ConfigLoader) -> Self {
        let clock = SystemClock::with_offset_minutes(config.settings().timezone_offset_minutes);
        Self::with_clock(config, Arc::new(clock))
    }

    /// Creates a new application state with an explicit clock.
    pub fn with_clock(config: ConfigLoader, clock: Arc<dyn Clock>) -> Self {
        let settings = config.settings();
        let calendar = Arc::new(
            PayrollCalendar::new(InMemoryCalendarStore::new())
                .with_default_interval(settings.default_period_interval_months),
        );
        let people = Arc::new(InMemoryPersonnelStore::new());
        let sequence = Arc::new(PrefixedSequence::from_settings(&settings.employee_id));

        let directory = Arc::new(PersonnelDirectory::new(
            Arc::clone(&people),
            sequence,
            settings.department_defaults,
        ));
        let ledger = Arc::new(LeaveLedger::new(
            Arc::clone(&calendar),
            Arc::clone(&people),
            *config.leave(),
        ));
        let transfers = Arc::new(TransferDesk::new(people));

        Self {
            config: Arc::new(config),
            clock,
            calendar,
            directory,
            ledger,
            transfers,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns today's date in the company timezone.
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Returns the payroll calendar.
    pub fn calendar(&self) -> &PayrollCalendar<InMemoryCalendarStore> {
        &self.calendar
    }

    /// Returns the personnel directory.
    pub fn directory(&self) -> &PersonnelDirectory<InMemoryPersonnelStore> {
        &self.directory
    }

    /// Returns the leave ledger.
    pub fn ledger(&self) -> &LeaveLedger<InMemoryCalendarStore, InMemoryPersonnelStore> {
        &self.ledger
    }

    /// Returns the transfer desk.
    pub fn transfers(&self) -> &TransferDesk<InMemoryPersonnelStore> {
        &self.transfers
    }
}
