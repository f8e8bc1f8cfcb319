//! Scope classification and conflict computation
//!
//! Pure functions deciding which host bindings are eligible for removal
//! and which commands actually collide with the editor's required chords.

use crate::bindings::{HostCommand, KeyBinding};
use key_types::KeyChord;
use std::collections::HashSet;

/// Is this binding scope eligible for removal at all?
///
/// A closed allow-list compared case-insensitively: "Global",
/// "Text Editor", and the empty scope. Bindings confined to any other
/// scope (tool windows, designers, ...) never collide with the editor's
/// keystrokes and are left alone.
pub fn is_important_scope(scope: &str) -> bool {
    scope.is_empty()
        || scope.eq_ignore_ascii_case("Global")
        || scope.eq_ignore_ascii_case("Text Editor")
}

/// Should this binding be skipped when looking for conflicts?
///
/// Skips bindings with an unimportant scope, an empty chord sequence, or
/// a directional first chord. Arrow keys are exempt even when they
/// collide: clearing them breaks navigation in host UI such as
/// completion popups, which must keep working under the modal layer.
pub fn should_skip(binding: &KeyBinding) -> bool {
    if !is_important_scope(&binding.scope) {
        return true;
    }

    match binding.first_chord() {
        None => true,
        Some(first) => first.is_directional(),
    }
}

/// Finds the commands whose bindings conflict with the required chords.
///
/// A command conflicts when at least one non-skipped binding's first
/// chord is a member of `required`. Bindings are scanned in their
/// original order and the first match wins, so each command appears at
/// most once. The output preserves the input commands' relative order.
pub fn find_conflicts(
    commands: &[HostCommand],
    required: &HashSet<KeyChord>,
) -> Vec<HostCommand> {
    let mut conflicting = Vec::new();

    for command in commands {
        for binding in &command.bindings {
            if should_skip(binding) {
                continue;
            }

            if let Some(first) = binding.first_chord() {
                if required.contains(&first) {
                    conflicting.push(command.clone());
                    break;
                }
            }
        }
    }

    conflicting
}
