//! Application state for the engine API.
//!
//! This module wires the engine components to shared in-memory stores and
//! makes them available to all request handlers.

use std::sync::Arc;

use crate::clock::TimeSource;
use crate::config::SettingsStore;
use crate::ledger::{AttendanceLedger, LeaveRegistry, PayrollProcessor};
use crate::notify::NotificationSink;
use crate::store::{
    InMemoryAttendanceStore, InMemoryBalanceStore, InMemoryLeaveStore, InMemoryPayrollStore,
    InMemoryRoster,
};

/// Shared application state.
///
/// Holds the roster, the settings store, and the three ledger components,
/// all sharing one set of record stores. Cloning is cheap; clones share
/// state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    roster: Arc<InMemoryRoster>,
    settings: SettingsStore,
    clock: Arc<dyn TimeSource>,
    attendance: AttendanceLedger,
    leave: LeaveRegistry,
    payroll: PayrollProcessor,
}

impl AppState {
    /// Creates application state over fresh in-memory stores.
    pub fn new(
        settings: SettingsStore,
        clock: Arc<dyn TimeSource>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        let roster = Arc::new(InMemoryRoster::new());

        let attendance = AttendanceLedger::new(
            roster.clone(),
            Arc::new(InMemoryAttendanceStore::new()),
            notifier.clone(),
        );
        let leave = LeaveRegistry::new(
            roster.clone(),
            Arc::new(InMemoryLeaveStore::new()),
            Arc::new(InMemoryBalanceStore::new()),
            clock.clone(),
            notifier.clone(),
        );
        let payroll = PayrollProcessor::new(
            roster.clone(),
            Arc::new(InMemoryPayrollStore::new()),
            settings.clone(),
            clock.clone(),
            notifier,
        );

        Self {
            inner: Arc::new(Inner {
                roster,
                settings,
                clock,
                attendance,
                leave,
                payroll,
            }),
        }
    }

    /// The injected time source.
    pub fn clock(&self) -> &Arc<dyn TimeSource> {
        &self.inner.clock
    }

    /// The employee roster.
    pub fn roster(&self) -> &InMemoryRoster {
        &self.inner.roster
    }

    /// The payroll settings store.
    pub fn settings(&self) -> &SettingsStore {
        &self.inner.settings
    }

    /// The attendance ledger.
    pub fn attendance(&self) -> &AttendanceLedger {
        &self.inner.attendance
    }

    /// The leave registry.
    pub fn leave(&self) -> &LeaveRegistry {
        &self.inner.leave
    }

    /// The payroll processor.
    pub fn payroll(&self) -> &PayrollProcessor {
        &self.inner.payroll
    }
}
