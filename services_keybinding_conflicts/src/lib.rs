//! # Keybinding Conflicts Service
//!
//! This crate implements key-binding conflict resolution for Keybridge.
//!
//! A modal editor embedded in a host application needs its keystrokes
//! delivered to the editor, not to the host's own commands. This service
//! finds the host commands whose bindings collide with the chords the
//! editor consumes and, after an explicit confirmed decision, clears
//! those commands' bindings.
//!
//! ## Philosophy
//!
//! - **One-shot**: The check-and-possibly-prompt workflow runs at most once
//!   per resolver instance; construct one instance per host session
//! - **Confirmed, never automatic**: Host bindings are only cleared after an
//!   affirmative yes/no decision from the confirmation collaborator
//! - **Snapshot, then mutate**: Host commands are enumerated eagerly into a
//!   fixed list before any filtering or mutation
//! - **Auditable**: Every pass records serializable resolution events
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - Persistent across sessions (decisions are not stored)
//! - A re-binding engine (conflicting commands are cleared, not re-bound)
//! - A multi-chord disambiguator (only the first chord of a binding is
//!   compared)
//! - Thread-safe (callers serialize invocations externally)

pub mod bindings;
pub mod chords;
pub mod policy;
pub mod resolver;

pub use bindings::{
    BindingStore, BindingStoreError, HostCommand, InMemoryBindingStore, KeyBinding,
};
pub use chords::{required_chords, ChordSource, ModeChords};
pub use policy::{find_conflicts, is_important_scope, should_skip};
pub use resolver::{
    Confirmation, ConfirmationPrompt, ConflictResolver, ResolutionEvent, ResolverError,
};
