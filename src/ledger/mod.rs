//! Stateful engine components.
//!
//! Each component owns one workflow over the record stores: the attendance
//! clock-in/out ledger, the leave request registry, and the idempotent
//! payroll processor. Components hold their collaborators behind the trait
//! seams in [`crate::store`], [`crate::clock`], and [`crate::notify`].

mod attendance;
mod leave;
mod payroll;

pub use attendance::{AttendanceLedger, late_clock_in_cutoff};
pub use leave::LeaveRegistry;
pub use payroll::{PayrollProcessor, PeriodRun};
