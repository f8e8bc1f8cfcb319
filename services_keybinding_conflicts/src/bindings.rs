//! Host command binding model

use key_types::KeyChord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binding store error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindingStoreError {
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Host rejected binding reset: {reason}")]
    ResetRejected { reason: String },
}

/// One key binding owned by a host command
///
/// A binding is an ordered chord sequence with a free-text scope telling
/// where it is active. Only the first chord of the sequence takes part in
/// conflict comparison; trailing chords belong to the host's own
/// multi-chord dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Where the binding is active (e.g. "Global", "Text Editor", or empty)
    pub scope: String,
    /// Full shortcut sequence
    pub chords: Vec<KeyChord>,
}

impl KeyBinding {
    /// Creates a new binding
    pub fn new(scope: impl Into<String>, chords: Vec<KeyChord>) -> Self {
        Self {
            scope: scope.into(),
            chords,
        }
    }

    /// Creates a single-chord binding
    pub fn single(scope: impl Into<String>, chord: KeyChord) -> Self {
        Self::new(scope, vec![chord])
    }

    /// The chord used for conflict comparison, if the sequence is non-empty
    pub fn first_chord(&self) -> Option<KeyChord> {
        self.chords.first().copied()
    }
}

/// Snapshot of one host command and its current bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostCommand {
    /// Command name as the host displays it
    pub name: String,
    /// Bindings in the host's order
    pub bindings: Vec<KeyBinding>,
}

impl HostCommand {
    /// Creates a new command snapshot
    pub fn new(name: impl Into<String>, bindings: Vec<KeyBinding>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }

    /// Creates a command with no bindings
    pub fn unbound(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }
}

/// Host binding store abstraction.
///
/// The host owns and enumerates its commands; the resolver snapshots them
/// eagerly and mutates only through [`BindingStore::reset_bindings`]. It
/// never creates or destroys commands.
pub trait BindingStore {
    /// Snapshot of every command and its current bindings
    ///
    /// The returned list is fixed at the moment of the call; later store
    /// mutations do not invalidate it.
    fn commands(&self) -> Vec<HostCommand>;

    /// Clears all bindings of the named command
    fn reset_bindings(&mut self, name: &str) -> Result<(), BindingStoreError>;
}

/// In-memory binding store backed by an ordered command list.
///
/// Hosts that keep their command table in memory can use this directly;
/// it also serves as the reference implementation of the store contract.
pub struct InMemoryBindingStore {
    commands: Vec<HostCommand>,
}

impl InMemoryBindingStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Creates a store from an ordered command list
    pub fn with_commands(commands: Vec<HostCommand>) -> Self {
        Self { commands }
    }

    /// Adds a command at the end of the enumeration order
    pub fn insert(&mut self, command: HostCommand) {
        self.commands.push(command);
    }

    /// Looks up a command by name
    pub fn get(&self, name: &str) -> Option<&HostCommand> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Number of commands in the store
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if the store holds no commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for InMemoryBindingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingStore for InMemoryBindingStore {
    fn commands(&self) -> Vec<HostCommand> {
        self.commands.clone()
    }

    fn reset_bindings(&mut self, name: &str) -> Result<(), BindingStoreError> {
        let command = self
            .commands
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| BindingStoreError::CommandNotFound(name.to_string()))?;
        command.bindings.clear();
        Ok(())
    }
}
