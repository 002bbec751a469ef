//! Structural change observation for the declared option set
//!
//! The option source reports child insertions and removals as mutation records.
//! The widget edits the same source it observes (synthesized options, selection
//! marks), so recording can be suspended around those edits. Suspension is a
//! depth counter: nested suspensions only resume observation once the
//! outermost bracket closes.

/// A structural change to the option source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationRecord {
    /// Options were inserted into and/or removed from the source
    ChildList {
        added: Vec<String>,
        removed: Vec<String>,
    },
}

/// Collects mutation records while observation is active
#[derive(Debug, Default)]
pub struct MutationObserver {
    suspended: usize,
    records: Vec<MutationRecord>,
}

impl MutationObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether structural changes are currently recorded
    pub fn is_observing(&self) -> bool {
        self.suspended == 0
    }

    /// Stop recording until the matching `resume`
    pub fn suspend(&mut self) {
        self.suspended += 1;
    }

    /// Close one suspension bracket
    pub fn resume(&mut self) {
        if self.suspended == 0 {
            log::warn!("Mutation observer resumed without a matching suspend");
            return;
        }
        self.suspended -= 1;
    }

    /// Record a structural change, dropped while suspended
    pub fn notify(&mut self, record: MutationRecord) {
        if self.is_observing() {
            self.records.push(record);
        }
    }

    /// Whether records are waiting to be delivered
    pub fn has_pending(&self) -> bool {
        !self.records.is_empty()
    }

    /// Hand over all pending records in the order they were made
    pub fn take_records(&mut self) -> Vec<MutationRecord> {
        std::mem::take(&mut self.records)
    }
}

#[cfg(test)]
#[path = "observer_tests.rs"]
mod observer_tests;
