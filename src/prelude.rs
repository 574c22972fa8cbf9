//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_dialogue::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::runtime::{
    DialogueNotification, DialogueRuntime, RuntimeBuilder, RuntimeCommand, RuntimeHandle,
};

// Dialogue core
pub use crate::core::dialogue::{
    AdvanceOutcome, DialogueConfig, DialogueController, DialogueDirector, DialogueEntry,
    DialogueError, DialogueHolder, DialogueMode, DialoguePhase, DialogueState, DialogueStore,
    ImageHandle, NameFormatter, PlayerName, RevealIntervals,
};

// Presentation
pub use crate::core::presentation::{
    Backdrop, BackdropView, DialogueBackground, DialogueView, TextBuffer,
};

// Input
pub use crate::core::input::{AdvanceBindings, InputEvent, KeyCode, MouseButton};
