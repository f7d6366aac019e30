//! Duplicate trigger detection and batch diagnostics
//!
//! Duplicates are found with a HashMap from canonical trigger to the
//! positions of every directive using it. Two directives collide when their
//! canonical triggers are equal, so `ctrl+super+a` and `super+ctrl+a` are
//! duplicates, as are `ctrl+KeyA` and `ctrl+key_a`.
//!
//! # Performance
//! - Add trigger: O(1) average case
//! - Check duplicate: O(1) average case
//! - Diagnostics for n directives: O(n·m) for average directive length m

use std::collections::HashMap;
use tracing::debug;

use crate::core::parser::parse_keybind;
use crate::core::types::{DiagnosticEntry, ParsedTrigger, Status};

/// Groups directive positions by canonical trigger.
#[derive(Debug, Default)]
pub struct DuplicateDetector {
    /// Maps canonical trigger to the indices of all directives using it.
    triggers: HashMap<String, Vec<usize>>,
}

/// A canonical trigger bound by two or more directives.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Duplicate {
    pub canonical: String,

    /// Input positions of the colliding directives (always 2 or more), ascending
    pub indices: Vec<usize>,
}

impl DuplicateDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups finished diagnostics by their `canonical` field.
    ///
    /// Entries with an empty canonical form (unparsed triggers) are skipped,
    /// so the groups match the `duplicate` flags `get_diagnostics` set.
    pub fn from_entries(entries: &[DiagnosticEntry]) -> Self {
        let mut detector = Self::new();
        for (index, entry) in entries.iter().enumerate() {
            if !entry.canonical.is_empty() {
                detector.add_canonical(index, entry.canonical.clone());
            }
        }
        detector
    }

    /// Records the trigger of the directive at `index`.
    pub fn add_trigger(&mut self, index: usize, trigger: &ParsedTrigger) {
        self.add_canonical(index, trigger.canonical());
    }

    fn add_canonical(&mut self, index: usize, canonical: String) {
        self.triggers.entry(canonical).or_default().push(index);
    }

    /// Returns true if `canonical` is used by 2 or more directives.
    pub fn is_duplicate(&self, canonical: &str) -> bool {
        self.triggers
            .get(canonical)
            .is_some_and(|indices| indices.len() > 1)
    }

    /// All duplicated triggers, ordered by first occurrence.
    pub fn find_duplicates(&self) -> Vec<Duplicate> {
        let mut duplicates: Vec<Duplicate> = self
            .triggers
            .iter()
            .filter(|(_, indices)| indices.len() > 1)
            .map(|(canonical, indices)| Duplicate {
                canonical: canonical.clone(),
                indices: indices.clone(),
            })
            .collect();

        duplicates.sort_by_key(|d| d.indices.first().copied());
        duplicates
    }
}

/// Validates a batch of directives and flags duplicated triggers.
///
/// Returns one entry per directive, in input order. Directives whose
/// trigger did not parse get an empty `canonical` and are never counted as
/// duplicates.
///
/// # Example
/// ```
/// use ghostty_keybind_lint::core::conflict::get_diagnostics;
///
/// let entries = get_diagnostics(&["ctrl+super+a=ignore", "super+ctrl+a=ignore", "ctrl+b=ignore"]);
/// assert!(entries[0].duplicate && entries[1].duplicate);
/// assert!(!entries[2].duplicate);
/// ```
pub fn get_diagnostics<S: AsRef<str>>(directives: &[S]) -> Vec<DiagnosticEntry> {
    let parsed: Vec<_> = directives.iter().map(|d| parse_keybind(d.as_ref())).collect();

    let mut detector = DuplicateDetector::new();
    for (index, entry) in parsed.iter().enumerate() {
        if let Some(trigger) = &entry.trigger {
            detector.add_trigger(index, trigger);
        }
    }

    let entries: Vec<DiagnosticEntry> = parsed
        .iter()
        .map(|entry| {
            let status = if entry.is_valid() { Status::Ok } else { Status::Invalid };
            let canonical = entry.trigger.as_ref().map(ParsedTrigger::canonical).unwrap_or_default();
            let duplicate = !canonical.is_empty() && detector.is_duplicate(&canonical);

            DiagnosticEntry {
                status,
                duplicate,
                errors: entry.messages(),
                canonical,
            }
        })
        .collect();

    debug!(
        entries = entries.len(),
        invalid = entries.iter().filter(|e| e.status == Status::Invalid).count(),
        duplicates = entries.iter().filter(|e| e.duplicate).count(),
        "computed keybind diagnostics"
    );

    entries
}
