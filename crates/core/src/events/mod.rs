//! Simulation events module.
//!
//! The simulator reports what happened during a request (rejected input,
//! provider failures, completed runs) to an injected [`SimulationEventSink`].
//! Runtimes decide where those events go; [`LogEventSink`] forwards them to
//! the `log` facade.

mod simulation_event;
mod sink;

pub use simulation_event::*;
pub use sink::*;
