//! Observability setup for CatChat: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
