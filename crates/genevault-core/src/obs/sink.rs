//! Metrics sink boundary.
//!
//! This module is the only bridge between operation logic and the global
//! metrics state. A scoped override lets tests capture events without
//! touching the process-local counters.

use crate::obs::metrics;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = const { RefCell::new(None) };
}

///
/// OpKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpKind {
    Create,
    Read,
    Transfer,
    Delete,
    RangeQuery,
    RichQuery,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    OpInvoked { kind: OpKind },
    RowsStreamed { rows: u64 },
    IndexDelta { inserts: u64, removes: u64 },
    UnknownOperation,
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink that writes into the process-local counters. Used when no
/// scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::OpInvoked { kind } => {
                metrics::with_state_mut(|m| match kind {
                    OpKind::Create => m.creates = m.creates.saturating_add(1),
                    OpKind::Read => m.reads = m.reads.saturating_add(1),
                    OpKind::Transfer => m.transfers = m.transfers.saturating_add(1),
                    OpKind::Delete => m.deletes = m.deletes.saturating_add(1),
                    OpKind::RangeQuery => {
                        m.range_queries = m.range_queries.saturating_add(1);
                    }
                    OpKind::RichQuery => {
                        m.rich_queries = m.rich_queries.saturating_add(1);
                    }
                });
            }

            MetricsEvent::RowsStreamed { rows } => {
                metrics::with_state_mut(|m| {
                    m.rows_streamed = m.rows_streamed.saturating_add(rows);
                });
            }

            MetricsEvent::IndexDelta { inserts, removes } => {
                metrics::with_state_mut(|m| {
                    m.index_inserts = m.index_inserts.saturating_add(inserts);
                    m.index_removes = m.index_removes.saturating_add(removes);
                });
            }

            MetricsEvent::UnknownOperation => {
                metrics::with_state_mut(|m| {
                    m.unknown_operations = m.unknown_operations.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) fn record(event: MetricsEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());
    if let Some(sink) = sink {
        sink.record(event);
    } else {
        GlobalMetricsSink.record(event);
    }
}

/// Run a closure with a temporary metrics sink override. The previous sink
/// is restored on every exit, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0.take();
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
