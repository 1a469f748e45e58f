//! Configuration for the shell's user-facing text.

/// The prompt used when none is configured.
pub const DEFAULT_PROMPT: &str = "> ";

/// The banner printed once when the shell starts, unless configured otherwise.
pub const DEFAULT_WELCOME: &str = "Welcome to the interactive shell!";

/// ShellConfig holds everything about a `Shell` that is not a command: what it prints before
/// reading input and how it styles its own messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Printed, without a trailing newline, before every line is read.
    pub prompt: String,
    /// Printed once, when the run-loop starts.
    pub welcome: String,
    /// Whether the shell's own messages (banner, diagnostics, errors) are colored.
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            welcome: DEFAULT_WELCOME.to_string(),
            color: true,
        }
    }
}

impl ShellConfig {
    pub fn with_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_welcome<S: Into<String>>(mut self, welcome: S) -> Self {
        self.welcome = welcome.into();
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = ShellConfig::default();

        assert_eq!(config.prompt, "> ");
        assert_eq!(config.welcome, "Welcome to the interactive shell!");
        assert!(config.color);
    }

    #[test]
    fn builder() {
        let config = ShellConfig::default()
            .with_prompt("| ")
            .with_welcome("hi")
            .with_color(false);

        assert_eq!(
            config,
            ShellConfig {
                prompt: String::from("| "),
                welcome: String::from("hi"),
                color: false,
            }
        );
    }
}
