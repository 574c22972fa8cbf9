//=========================================================================
// Name Formatting
//=========================================================================
//
// Substitutes the player-chosen name into raw dialogue text.
//
// The controller applies the formatter to both the text and the talker of
// each entry when it advances. Formatters must be pure with respect to the
// controller: same input and same name state give the same output.
//
//=========================================================================

/// Placeholder replaced by [`PlayerName`] unless configured otherwise.
pub const DEFAULT_NAME_PLACEHOLDER: &str = "{name}";

//=== NameFormatter =======================================================

/// Formats raw dialogue text before it is shown.
///
/// Implemented for any `Fn(&str) -> String + Send`, so ad-hoc formatters
/// can be passed as closures.
pub trait NameFormatter: Send {
    fn format(&self, raw: &str) -> String;

    /// Changes the player name used from now on.
    ///
    /// Formatters without name state ignore it.
    fn set_player_name(&mut self, _name: &str) {}
}

impl<F> NameFormatter for F
where
    F: Fn(&str) -> String + Send,
{
    fn format(&self, raw: &str) -> String {
        self(raw)
    }
}

//=== PlayerName ==========================================================

/// Replaces every occurrence of a placeholder with the player's name.
///
/// # Example
///
/// ```
/// use aetheric_dialogue::prelude::*;
///
/// let name = PlayerName::new("Avery");
/// assert_eq!(name.format("Hello, {name}!"), "Hello, Avery!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerName {
    placeholder: String,
    name: String,
}

impl PlayerName {
    /// Creates a formatter using [`DEFAULT_NAME_PLACEHOLDER`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            placeholder: DEFAULT_NAME_PLACEHOLDER.to_owned(),
            name: name.into(),
        }
    }

    /// Uses a custom placeholder token.
    ///
    /// # Panics
    ///
    /// Panics if `placeholder` is empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        assert!(!placeholder.is_empty(), "Name placeholder must not be empty");
        self.placeholder = placeholder;
        self
    }

    /// Changes the name used for subsequent lines.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

impl Default for PlayerName {
    fn default() -> Self {
        Self::new("")
    }
}

impl NameFormatter for PlayerName {
    fn format(&self, raw: &str) -> String {
        raw.replace(&self.placeholder, &self.name)
    }

    fn set_player_name(&mut self, name: &str) {
        self.set_name(name);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_placeholder() {
        let name = PlayerName::new("Avery");
        assert_eq!(
            name.format("{name}? Is that you, {name}?"),
            "Avery? Is that you, Avery?"
        );
    }

    #[test]
    fn text_without_placeholder_is_unchanged() {
        let name = PlayerName::new("Avery");
        assert_eq!(name.format("Good morning."), "Good morning.");
    }

    #[test]
    fn custom_placeholder() {
        let name = PlayerName::new("Jun").with_placeholder("%PLAYER%");
        assert_eq!(name.format("Hi %PLAYER%, {name}"), "Hi Jun, {name}");
    }

    #[test]
    fn renaming_changes_later_output() {
        let mut name = PlayerName::new("Avery");
        name.set_name("Rowan");
        assert_eq!(name.name(), "Rowan");
        assert_eq!(name.format("{name}"), "Rowan");
    }

    #[test]
    #[should_panic(expected = "Name placeholder must not be empty")]
    fn empty_placeholder_panics() {
        PlayerName::new("x").with_placeholder("");
    }

    #[test]
    fn renaming_through_trait_object() {
        let mut formatter: Box<dyn NameFormatter> = Box::new(PlayerName::new("Avery"));
        formatter.set_player_name("Rowan");
        assert_eq!(formatter.format("Hi {name}"), "Hi Rowan");
    }

    #[test]
    fn closures_are_formatters() {
        let mut upper = |raw: &str| raw.to_uppercase();
        NameFormatter::set_player_name(&mut upper, "ignored");
        assert_eq!(NameFormatter::format(&upper, "hey"), "HEY");
    }
}
