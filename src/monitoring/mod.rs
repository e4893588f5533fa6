/*!
 * Monitoring
 * Structured logging setup and simulation spans
 */

mod tracer;

pub use tracer::{init_tracing, SimulationSpan};
