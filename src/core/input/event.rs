//=========================================================================
// Input Event Types
//
// Portable representation of the inputs that can drive a dialogue.
//
// The windowing layer (Winit, SDL, a game engine) stays outside this
// crate; it translates its own events into `InputEvent`s and sends them to
// the runtime in per-frame batches.
//
// Event Flow:
// ```text
// Host input layer
//         ↓
//    InputEvent (this module)
//         ↓
//    AdvanceTracker (edge detection + bindings)
//         ↓
//    DialogueDirector::update(clicked)
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Side buttons, thumb buttons, macro keys.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard keys relevant to dialogue navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    KeyE,
    KeyF,
    KeyX,
    KeyZ,
}

//=== InputEvent ==========================================================

/// A single discrete input transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    KeyDown { key: KeyCode },
    KeyUp { key: KeyCode },
    MouseButtonDown { button: MouseButton },
    MouseButtonUp { button: MouseButton },

    /// Anything the host could not map. Ignored.
    Unidentified,
}

impl InputEvent {
    /// Press followed by release of `button`, as one frame's batch.
    pub fn click(button: MouseButton) -> [InputEvent; 2] {
        [
            InputEvent::MouseButtonDown { button },
            InputEvent::MouseButtonUp { button },
        ]
    }
}
