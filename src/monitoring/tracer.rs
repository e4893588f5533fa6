/*!
 * Structured Tracing
 * Subscriber setup and run-level spans using the tracing crate
 */

use crate::core::limits::ENV_TRACE_JSON;
use crate::core::types::Ticks;
use std::time::Instant;
use tracing::{debug, info, span, Level, Span};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - RR_SIM_TRACE_JSON: Enable JSON output (default: false)
///
/// Logs go to stderr so stdout stays reserved for the exported trace.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Span covering one simulation run
pub struct SimulationSpan {
    span: Span,
    start: Instant,
}

impl SimulationSpan {
    pub fn new(quantum: Ticks, processes: usize) -> Self {
        let span = span!(
            Level::INFO,
            "simulation",
            quantum = quantum,
            processes = processes,
            makespan = tracing::field::Empty,
            duration_us = tracing::field::Empty,
        );

        span.in_scope(|| debug!(quantum, processes, "simulation started"));

        Self {
            span,
            start: Instant::now(),
        }
    }

    /// The underlying span, for entering around the run
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Record the makespan and wall-clock cost of the run
    pub fn finish(self, makespan: Ticks) {
        let duration_us = self.start.elapsed().as_micros() as u64;
        self.span.record("makespan", makespan);
        self.span.record("duration_us", duration_us);
        self.span
            .in_scope(|| debug!(makespan, duration_us, "simulation finished"));
    }
}
