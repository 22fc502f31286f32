//! IVR path scripting — the data model for scripted DTMF traversals.
//!
//! A [`DialPath`] is one complete scripted walk through an IVR menu tree:
//! an ordered list of [`ToneGroup`]s, each a burst of digits followed by a
//! pause that lets the far-end menu advance. Paths come from a script file
//! (see [`ScriptCatalog::from_file`]) or from the built-in table, and are
//! picked at random by [`PathSelector`].

mod catalog;
mod customer;
mod parser;
mod selector;

#[cfg(test)]
mod selector_test;

pub use catalog::{ScriptCatalog, DEFAULT_SINGLE_DIGIT_DELAY};
pub use customer::CustomerId;
pub use parser::{LineError, ScriptError};
pub use selector::{PathSelector, SelectError};

use std::fmt;
use std::time::Duration;

/// One timed burst of DTMF digits within a [`DialPath`].
///
/// A multi-digit group is keyed as a single gesture; the `delay` after the
/// group paces the next menu transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneGroup {
    digits: Vec<u8>,
    delay: Duration,
}

impl ToneGroup {
    /// Build a group from resolved digits (each in `0..=9`, non-empty).
    ///
    /// Both constraints are upheld by the parser and the built-in catalog.
    pub fn new(digits: Vec<u8>, delay: Duration) -> Self {
        debug_assert!(!digits.is_empty(), "tone group must hold at least one digit");
        debug_assert!(digits.iter().all(|d| *d <= 9));
        Self { digits, delay }
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Pause after the last digit of this group.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl fmt::Display for ToneGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, digit) in self.digits.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, "]")
    }
}

/// One complete scripted traversal of an IVR menu tree.
///
/// Immutable once constructed; identified by its index in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialPath {
    groups: Vec<ToneGroup>,
}

impl DialPath {
    /// Build a path from its groups (non-empty, upheld by the constructors
    /// in this module).
    pub fn new(groups: Vec<ToneGroup>) -> Self {
        debug_assert!(!groups.is_empty(), "dial path must hold at least one group");
        Self { groups }
    }

    pub fn groups(&self) -> &[ToneGroup] {
        &self.groups
    }

    /// Total number of digits across all groups.
    pub fn digit_count(&self) -> usize {
        self.groups.iter().map(|g| g.digits().len()).sum()
    }
}

/// Renders the script-line form, e.g. `[2,2,2,2,4,7] [1,1,1]`.
///
/// The rendering parses back to an equal path (modulo group delays, which
/// the parser re-derives from group length).
impl fmt::Display for DialPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{group}")?;
        }
        Ok(())
    }
}
