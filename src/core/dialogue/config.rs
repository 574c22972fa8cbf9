//=========================================================================
// Dialogue Configuration
//=========================================================================
//
// Reveal speed, inter-line pause and drive mode.
//
// Default Values:
//   regular: 50 ms   comma: 250 ms   period: 400 ms
//   line pause: 1 s  mode: Click
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== DialogueMode ========================================================

/// Policy deciding what triggers the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialogueMode {
    /// A click skips the reveal animation or advances a finished line.
    #[default]
    Click,

    /// Finished lines advance after the line pause without user input.
    Auto,

    /// Only explicit calls advance; the director takes no action.
    Script,
}

//=== RevealIntervals =====================================================

/// Delays applied after each revealed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealIntervals {
    /// After any character that is not a comma or a period.
    pub regular: Duration,

    /// After a comma.
    pub comma: Duration,

    /// After a period.
    pub period: Duration,
}

impl RevealIntervals {
    /// Uses the same delay for every character.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            regular: delay,
            comma: delay,
            period: delay,
        }
    }

    /// Selects the delay following `grapheme`.
    ///
    /// Returns the delay and whether it was a punctuation delay.
    pub fn delay_after(&self, grapheme: &str) -> (Duration, bool) {
        match grapheme {
            "," => (self.comma, true),
            "." => (self.period, true),
            _ => (self.regular, false),
        }
    }
}

impl Default for RevealIntervals {
    fn default() -> Self {
        Self {
            regular: Duration::from_millis(50),
            comma: Duration::from_millis(250),
            period: Duration::from_millis(400),
        }
    }
}

//=== DialogueConfig ======================================================

/// Speed and mode settings for a dialogue session.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use aetheric_dialogue::prelude::*;
///
/// let config = DialogueConfig::new()
///     .with_regular_interval(Duration::from_millis(30))
///     .with_line_pause(Duration::from_secs(2))
///     .with_mode(DialogueMode::Auto);
///
/// assert_eq!(config.intervals.regular, Duration::from_millis(30));
/// assert_eq!(config.mode, DialogueMode::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueConfig {
    pub intervals: RevealIntervals,

    /// Wait before a line starts in Click/Auto mode (start-up and between
    /// lines in Auto mode).
    pub line_pause: Duration,

    pub mode: DialogueMode,
}

impl DialogueConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self {
            intervals: RevealIntervals::default(),
            line_pause: Duration::from_secs(1),
            mode: DialogueMode::default(),
        }
    }

    pub fn with_intervals(mut self, intervals: RevealIntervals) -> Self {
        self.intervals = intervals;
        self
    }

    pub fn with_regular_interval(mut self, delay: Duration) -> Self {
        self.intervals.regular = delay;
        self
    }

    pub fn with_comma_interval(mut self, delay: Duration) -> Self {
        self.intervals.comma = delay;
        self
    }

    pub fn with_period_interval(mut self, delay: Duration) -> Self {
        self.intervals.period = delay;
        self
    }

    pub fn with_line_pause(mut self, pause: Duration) -> Self {
        self.line_pause = pause;
        self
    }

    pub fn with_mode(mut self, mode: DialogueMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = DialogueConfig::new();
        assert_eq!(config.intervals.regular, Duration::from_millis(50));
        assert_eq!(config.intervals.comma, Duration::from_millis(250));
        assert_eq!(config.intervals.period, Duration::from_millis(400));
        assert_eq!(config.line_pause, Duration::from_secs(1));
        assert_eq!(config.mode, DialogueMode::Click);
    }

    #[test]
    fn delay_selection_by_character() {
        let intervals = RevealIntervals {
            regular: Duration::from_millis(1),
            comma: Duration::from_millis(2),
            period: Duration::from_millis(3),
        };

        assert_eq!(intervals.delay_after(","), (Duration::from_millis(2), true));
        assert_eq!(intervals.delay_after("."), (Duration::from_millis(3), true));
        assert_eq!(intervals.delay_after("a"), (Duration::from_millis(1), false));
        assert_eq!(intervals.delay_after("!"), (Duration::from_millis(1), false));
    }

    #[test]
    fn fluent_setters_chain() {
        let config = DialogueConfig::new()
            .with_comma_interval(Duration::from_millis(5))
            .with_period_interval(Duration::from_millis(6))
            .with_mode(DialogueMode::Script);

        assert_eq!(config.intervals.comma, Duration::from_millis(5));
        assert_eq!(config.intervals.period, Duration::from_millis(6));
        assert_eq!(config.mode, DialogueMode::Script);
    }

    #[test]
    fn uniform_intervals() {
        let intervals = RevealIntervals::uniform(Duration::from_millis(9));
        assert_eq!(intervals.delay_after(",").0, Duration::from_millis(9));
        assert_eq!(intervals.delay_after("x").0, Duration::from_millis(9));
    }
}
