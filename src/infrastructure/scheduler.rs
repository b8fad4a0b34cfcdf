//! Scheduler implementations
//!
//! - [`IntervalScheduler`]: tokio interval tasks that post ticks into the runtime
//! - [`ManualClock`]: simulated time, advanced explicitly by tests

pub mod interval;
pub mod manual;

pub use interval::IntervalScheduler;
pub use manual::ManualClock;
