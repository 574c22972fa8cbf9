//=========================================================================
// Signals
//=========================================================================
//
// Ordered observer lists for dialogue notifications.
//
// Architecture:
//   Controller ── emit(&value) ──→ Signal<T>
//                                     ├─ subscriber #0
//                                     ├─ subscriber #1
//                                     └─ ...           (insertion order)
//
// Emitting with zero subscribers is a no-op.
//
//=========================================================================

//=== Subscription ========================================================

/// Identifies a subscriber so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

//=== Signal ==============================================================

type Subscriber<T> = Box<dyn FnMut(&T) + Send>;

/// Ordered list of callbacks invoked synchronously on [`emit`](Self::emit).
pub struct Signal<T> {
    subscribers: Vec<(Subscription, Subscriber<T>)>,
    next_id: u64,
}

impl<T> Signal<T> {
    /// Creates a signal with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends a subscriber; it runs after all earlier subscribers.
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&T) + Send + 'static,
    {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(id, _)| *id != subscription);
        self.subscribers.len() != before
    }

    /// Invokes every subscriber in order.
    pub fn emit(&mut self, value: &T) {
        for (_, callback) in &mut self.subscribers {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

//=== DialogueSignals =====================================================

/// Notifications emitted by the dialogue controller.
#[derive(Debug, Default)]
pub struct DialogueSignals {
    /// A new line became current. Carries the line index.
    pub index_changed: Signal<usize>,

    /// One character was revealed. Carries `true` when the character
    /// selected a punctuation delay (comma or period).
    pub character_revealed: Signal<bool>,

    /// The current line is fully shown. Carries its character count.
    pub line_finished: Signal<usize>,
}

//=========================================================================
// Unit Tests
//=========================================================================
