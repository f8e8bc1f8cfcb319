//! Required chord aggregation

use key_types::KeyChord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Chords consumed by one editor mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeChords {
    /// Mode name (e.g. "NORMAL", "INSERT")
    pub name: String,
    /// Chords the mode consumes
    pub chords: Vec<KeyChord>,
}

impl ModeChords {
    /// Creates a new mode chord set
    pub fn new(name: impl Into<String>, chords: Vec<KeyChord>) -> Self {
        Self {
            name: name.into(),
            chords,
        }
    }
}

/// Source of the chords the modal editor needs to receive.
///
/// Implemented by the editor integration. The resolver only reads through
/// this boundary; the editor's mode and command internals stay opaque.
pub trait ChordSource {
    /// Chords consumed by each mode
    fn mode_chords(&self) -> Vec<ModeChords>;

    /// The designated chord that turns the modal layer off
    ///
    /// Sourced from the editor's global configuration; it must keep working
    /// even when no mode claims it, so it is always part of the required set.
    fn disable_chord(&self) -> KeyChord;
}

/// Builds the set of chords the editor needs for one resolution pass.
///
/// The union of every mode's chords plus the disable chord. Duplicates
/// across modes collapse under set semantics.
pub fn required_chords(source: &dyn ChordSource) -> HashSet<KeyChord> {
    let mut required = HashSet::new();
    for mode in source.mode_chords() {
        required.extend(mode.chords);
    }
    required.insert(source.disable_chord());
    required
}
