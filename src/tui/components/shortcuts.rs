//! Declarative builder for TUI shortcuts

use super::footer::Shortcut;

/// Builder for creating shortcut lists with common patterns
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add j/k for list navigation
    pub fn with_navigation(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("j/k", "Up/Down"));
        self
    }

    /// Add 1-4 for switching screens
    pub fn with_screens(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("1-4", "Screens"));
        self
    }

    /// Add Ctrl+q for quit
    pub fn with_quit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("C-q", "Quit"));
        self
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_order() {
        let shortcuts = ShortcutsBuilder::new()
            .with_navigation()
            .add("Enter", "Open")
            .with_quit()
            .build();

        let keys: Vec<&str> = shortcuts.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["j/k", "Enter", "C-q"]);
    }

    #[test]
    fn test_empty_builder() {
        assert!(ShortcutsBuilder::new().build().is_empty());
    }
}
