//! CPU scheduling domain models.
//!
//! Provides the data types flowing through a simulation run: process
//! descriptors going in, Gantt segments and metrics coming out.
//!
//! # Lifecycle
//!
//! | Type | Created by | Lifetime |
//! |------|-----------|----------|
//! | `RawProcess` | Front end | Until validated |
//! | `ProcessDescriptor` | Caller / validator | One run, immutable |
//! | `RuntimeProcessState` | Scheduler | One scheduler invocation |
//! | `SimulationResult` | Orchestrator | Returned to caller |

mod process;
mod result;
mod timeline;

pub use process::{ProcessDescriptor, RawField, RawProcess, RuntimeProcessState};
pub use result::{Averages, ProcessMetrics, SimulationResult};
pub use timeline::{GanttSegment, Timeline};
