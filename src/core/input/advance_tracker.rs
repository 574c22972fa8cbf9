//=========================================================================
// Advance Tracker
//=========================================================================
//
// Turns raw input batches into a per-frame "advance pressed" flag.
//
// Architecture:
//   InputEvent → process_events() → held sets + pressed-this-frame sets
//                                        ↓
//                        advance_requested() (matches bindings)
//
// Frame lifecycle: clear() → process_events() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};

//=== AdvanceBindings =====================================================

/// Keys and buttons that count as an advance (click) request.
///
/// Defaults to the left mouse button only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceBindings {
    keys: HashSet<KeyCode>,
    buttons: HashSet<MouseButton>,
}

impl AdvanceBindings {
    /// Creates bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            keys: HashSet::new(),
            buttons: HashSet::new(),
        }
    }

    pub fn bind_key(&mut self, key: KeyCode) -> &mut Self {
        self.keys.insert(key);
        self
    }

    pub fn bind_button(&mut self, button: MouseButton) -> &mut Self {
        self.buttons.insert(button);
        self
    }

    pub fn unbind_key(&mut self, key: KeyCode) -> &mut Self {
        self.keys.remove(&key);
        self
    }

    pub fn unbind_button(&mut self, button: MouseButton) -> &mut Self {
        self.buttons.remove(&button);
        self
    }

    pub fn is_key_bound(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    pub fn is_button_bound(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }
}

impl Default for AdvanceBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind_button(MouseButton::Left);
        bindings
    }
}

//=== AdvanceTracker ======================================================

/// Tracks held inputs and this frame's presses.
pub struct AdvanceTracker {
    bindings: AdvanceBindings,

    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,

    //--- Frame Deltas (reset each frame via clear()) --------------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    buttons_pressed_this_frame: HashSet<MouseButton>,
}

impl AdvanceTracker {
    /// Creates a tracker with the given bindings and nothing held.
    pub fn new(bindings: AdvanceBindings) -> Self {
        Self {
            bindings,
            keys_down: HashSet::new(),
            buttons_down: HashSet::new(),
            keys_pressed_this_frame: HashSet::new(),
            buttons_pressed_this_frame: HashSet::new(),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears this frame's presses. Held state is kept.
    pub fn clear(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.buttons_pressed_this_frame.clear();
    }

    /// Applies a batch of input events in order.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key } => {
                // Only a fresh press counts; OS key repeat does not.
                if self.keys_down.insert(key) {
                    self.keys_pressed_this_frame.insert(key);
                }
            }
            InputEvent::KeyUp { key } => {
                self.keys_down.remove(&key);
            }
            InputEvent::MouseButtonDown { button } => {
                if self.buttons_down.insert(button) {
                    self.buttons_pressed_this_frame.insert(button);
                }
            }
            InputEvent::MouseButtonUp { button } => {
                self.buttons_down.remove(&button);
            }
            InputEvent::Unidentified => {}
        }
    }

    //--- Query API --------------------------------------------------------

    /// `true` if any bound key or button went down this frame.
    pub fn advance_requested(&self) -> bool {
        self.keys_pressed_this_frame
            .iter()
            .any(|key| self.bindings.is_key_bound(*key))
            || self
                .buttons_pressed_this_frame
                .iter()
                .any(|button| self.bindings.is_button_bound(*button))
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed_this_frame.contains(&button)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn bindings(&self) -> &AdvanceBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut AdvanceBindings {
        &mut self.bindings
    }
}

impl Default for AdvanceTracker {
    fn default() -> Self {
        Self::new(AdvanceBindings::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
