//=========================================================================
// Aetheric Dialogue — Library Root
//
// This crate defines the public API surface of the dialogue system.
//
// Responsibilities:
// - Expose the typewriter controller and its drive modes (`core::dialogue`)
// - Expose the view seams a host renders through (`core::presentation`)
// - Provide an optional threaded runtime (`RuntimeBuilder`)
//
// Typical usage:
// ```no_run
// use aetheric_dialogue::prelude::*;
//
// let controller = DialogueController::builder()
//     .with_store(DialogueHolder::new().with_entry(DialogueEntry::new("Hi.", "Mara")))
//     .build()
//     .expect("store is set");
// let director = DialogueDirector::new(controller, &DialogueConfig::new());
// let handle = RuntimeBuilder::new().build(director).spawn();
// handle.click().ok();
// handle.shutdown().ok();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the dialogue state machine, input tracking and the
// presentation traits. Hosts that tick the dialogue on their own loop
// only need this module.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `runtime` runs a director on its own logic thread and talks to the
// host over channels.
//
mod runtime;

//--- Public Exports ------------------------------------------------------

pub use runtime::{
    DialogueNotification, DialogueRuntime, RuntimeBuilder, RuntimeCommand, RuntimeHandle,
};
