//=========================================================================
// Presentation Bindings
//=========================================================================
//
// Contracts between the dialogue controller and the widgets that show it.
//
// Components:
// - `text`: text and talker name (`DialogueView`, `TextBuffer`)
// - `backdrop`: background and portraits (`BackdropView`, `Backdrop`,
//   `DialogueBackground`)
//
// Nothing here renders; implementations forward to whatever UI toolkit
// the game uses.
//
//=========================================================================

//=== Module Declarations =================================================

mod backdrop;
mod text;

//=== Public API ==========================================================

pub use backdrop::{Backdrop, BackdropView, DialogueBackground};
pub use text::{DialogueView, TextBuffer};
