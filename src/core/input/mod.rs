//=========================================================================
// Input
//
// Input types and click detection for Click-mode dialogues.
//
// Responsibilities:
// - Represent keyboard and mouse transitions portably (`event`)
// - Detect per-frame presses of the bound advance inputs (`advance_tracker`)
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod advance_tracker;

//=== Public API ==========================================================

pub use advance_tracker::{AdvanceBindings, AdvanceTracker};
pub use event::{InputEvent, KeyCode, MouseButton};
