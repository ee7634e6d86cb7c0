//! Process-local operation counters.

use std::cell::RefCell;

///
/// OpCounters
///
/// Monotonic counters since process start (or the last reset). Saturating
/// arithmetic: counters never wrap or panic.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OpCounters {
    pub creates: u64,
    pub reads: u64,
    pub transfers: u64,
    pub deletes: u64,
    pub range_queries: u64,
    pub rich_queries: u64,
    pub rows_streamed: u64,
    pub index_inserts: u64,
    pub index_removes: u64,
    pub unknown_operations: u64,
}

thread_local! {
    static STATE: RefCell<OpCounters> = RefCell::new(OpCounters::default());
}

pub(crate) fn with_state_mut<T>(f: impl FnOnce(&mut OpCounters) -> T) -> T {
    STATE.with(|cell| f(&mut cell.borrow_mut()))
}

/// Snapshot the current counters for endpoint/test plumbing.
#[must_use]
pub fn snapshot() -> OpCounters {
    STATE.with(|cell| *cell.borrow())
}

/// Reset all counters.
pub fn reset() {
    STATE.with(|cell| *cell.borrow_mut() = OpCounters::default());
}
