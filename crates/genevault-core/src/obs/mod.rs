//! Observability.
//!
//! Record logic MUST NOT mutate metrics state directly. All
//! instrumentation flows through [`sink::MetricsEvent`] and
//! [`sink::MetricsSink`]; the counters live outside the data path and
//! never influence operation outcomes.

pub mod metrics;
pub mod sink;

pub(crate) use sink::{MetricsEvent, record};
