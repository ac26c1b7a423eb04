//! Issuance of human-readable employee IDs.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::EmployeeIdSettings;

/// Hands out employee IDs that are never repeated by the same sequence.
pub trait EmployeeSequence: Send + Sync {
    /// Returns the next ID.
    fn next_id(&self) -> String;
}

/// A counter formatted as `<prefix><zero-padded number>`, e.g. `EMP0001`.
#[derive(Debug)]
pub struct PrefixedSequence {
    prefix: String,
    padding: usize,
    next: AtomicU64,
}

impl PrefixedSequence {
    /// Creates a sequence starting at `start`.
    pub fn new(prefix: impl Into<String>, padding: usize, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            padding,
            next: AtomicU64::new(start),
        }
    }

    /// Creates a sequence from the configured ID format.
    pub fn from_settings(settings: &EmployeeIdSettings) -> Self {
        Self::new(settings.prefix.clone(), settings.padding, settings.start)
    }
}

impl EmployeeSequence for PrefixedSequence {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{:0width$}", self.prefix, n, width = self.padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_padded_and_increasing() {
        let seq = PrefixedSequence::new("EMP", 4, 1);
        assert_eq!(seq.next_id(), "EMP0001");
        assert_eq!(seq.next_id(), "EMP0002");
    }

    #[test]
    fn test_counter_wider_than_padding_is_not_truncated() {
        let seq = PrefixedSequence::new("E", 2, 123);
        assert_eq!(seq.next_id(), "E123");
    }
}
