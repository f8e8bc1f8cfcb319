//! One-shot conflict resolution workflow

use crate::bindings::{BindingStore, BindingStoreError, HostCommand};
use crate::chords::{required_chords, ChordSource};
use crate::policy::find_conflicts;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest command name shown verbatim in the conflict report
const MAX_DISPLAY_NAME: usize = 50;

/// Title passed to the confirmation collaborator
const REPORT_TITLE: &str = "Remove Conflicting Key Bindings";

/// Resolver error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolverError {
    /// The host binding store handle was absent.
    ///
    /// Raised before any state mutation; the check does not count as run
    /// and the caller may retry with a valid store.
    #[error("Host binding store is required")]
    MissingHost,

    /// Best-effort reset finished with failures.
    ///
    /// Every conflicting command was attempted; `failures` lists each
    /// command whose reset the store rejected. Commands reset before or
    /// after a failure stay reset.
    #[error("Failed to reset bindings for {} command(s)", failures.len())]
    ResetFailed {
        failures: Vec<(String, BindingStoreError)>,
    },
}

/// Yes/no decision from the confirmation collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confirmation {
    Yes,
    No,
}

/// Blocking yes/no confirmation boundary.
///
/// Presents the conflict report to an external actor and blocks until a
/// decision exists. No timeout or cancellation is defined.
pub trait ConfirmationPrompt {
    fn confirm(&mut self, title: &str, message: &str) -> Confirmation;
}

/// Resolution event for the audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionEvent {
    /// The one-time check ran
    CheckStarted { required_chords: usize },
    /// No eligible command collided with a required chord
    NoConflicts,
    /// Conflicting commands were reported for confirmation
    ConflictsFound { commands: Vec<String> },
    /// The confirmation collaborator answered
    DecisionReceived { accepted: bool },
    /// A command's bindings were cleared
    BindingsReset { command: String },
    /// A command's reset failed; the pass continued with the rest
    ResetFailed { command: String, reason: String },
}

/// One-shot key-binding conflict resolver
///
/// Holds the NotChecked -> Checked lifecycle for one host session. The
/// check-and-possibly-prompt workflow runs at most once for the life of
/// the instance; construct a new resolver per session rather than sharing
/// a process-wide one.
///
/// Not synchronized internally: callers must serialize invocations.
pub struct ConflictResolver {
    has_checked: bool,
    audit_trail: Vec<ResolutionEvent>,
}

impl ConflictResolver {
    /// Creates a resolver in the NotChecked state
    pub fn new() -> Self {
        Self {
            has_checked: false,
            audit_trail: Vec::new(),
        }
    }

    /// Returns true once the one-time check has actually run
    pub fn has_checked(&self) -> bool {
        self.has_checked
    }

    /// Returns the audit trail of resolution events
    pub fn audit_trail(&self) -> &[ResolutionEvent] {
        &self.audit_trail
    }

    /// Runs the one-time conflict check.
    ///
    /// On the NotChecked -> Checked transition this gathers the chords the
    /// editor needs, snapshots the host's commands, and, if any eligible
    /// binding collides, asks the prompt for a decision before clearing
    /// the conflicting commands' bindings. Calling again once Checked is a
    /// no-op regardless of arguments.
    ///
    /// `host` is the only validated precondition: `None` fails with
    /// [`ResolverError::MissingHost`] without consuming the one shot.
    pub fn check_once(
        &mut self,
        host: Option<&mut dyn BindingStore>,
        chords: &dyn ChordSource,
        prompt: &mut dyn ConfirmationPrompt,
    ) -> Result<(), ResolverError> {
        let host = host.ok_or(ResolverError::MissingHost)?;

        if self.has_checked {
            return Ok(());
        }
        self.has_checked = true;

        self.check_for_conflicts(host, chords, prompt)
    }

    /// Check for and remove conflicting key bindings
    fn check_for_conflicts(
        &mut self,
        host: &mut dyn BindingStore,
        chords: &dyn ChordSource,
        prompt: &mut dyn ConfirmationPrompt,
    ) -> Result<(), ResolverError> {
        let required = required_chords(chords);
        self.audit_trail.push(ResolutionEvent::CheckStarted {
            required_chords: required.len(),
        });

        // Enumerate eagerly, mutate after: the snapshot is fixed before
        // any filtering so later resets cannot invalidate the pass.
        let commands = host.commands();
        let conflicting = find_conflicts(&commands, &required);

        if conflicting.is_empty() {
            self.audit_trail.push(ResolutionEvent::NoConflicts);
            return Ok(());
        }

        let names: Vec<String> = conflicting.iter().map(|c| c.name.clone()).collect();
        self.audit_trail.push(ResolutionEvent::ConflictsFound {
            commands: names,
        });

        let message = format_conflict_report(&conflicting);
        let decision = prompt.confirm(REPORT_TITLE, &message);
        self.audit_trail.push(ResolutionEvent::DecisionReceived {
            accepted: decision == Confirmation::Yes,
        });

        if decision == Confirmation::No {
            return Ok(());
        }

        // Best-effort: a failed reset does not stop the remaining commands,
        // and every failure is collected and surfaced.
        let mut failures = Vec::new();
        for command in &conflicting {
            match host.reset_bindings(&command.name) {
                Ok(()) => self.audit_trail.push(ResolutionEvent::BindingsReset {
                    command: command.name.clone(),
                }),
                Err(err) => {
                    self.audit_trail.push(ResolutionEvent::ResetFailed {
                        command: command.name.clone(),
                        reason: err.to_string(),
                    });
                    failures.push((command.name.clone(), err));
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(ResolverError::ResetFailed { failures })
        }
    }
}

impl Default for ConflictResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats the human-readable conflict report.
///
/// One tab-indented line per conflicting command, in conflict order.
pub fn format_conflict_report(conflicting: &[HostCommand]) -> String {
    let mut message = String::from("Conflicting key bindings found. Remove?\n");
    for command in conflicting {
        message.push('\t');
        message.push_str(&display_name(&command.name));
        message.push('\n');
    }
    message
}

/// Truncates a command name for display.
///
/// Names longer than the display limit keep their first 50 characters
/// and gain a `...` marker; shorter names appear verbatim.
fn display_name(name: &str) -> String {
    if name.chars().count() > MAX_DISPLAY_NAME {
        let mut truncated: String = name.chars().take(MAX_DISPLAY_NAME).collect();
        truncated.push_str("...");
        truncated
    } else {
        name.to_string()
    }
}
