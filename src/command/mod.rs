//! A module for the commands portion of minish.
//!
//! A command is a flat `CommandDescriptor`: a name, some documentation and a handler closure. There
//! is no command hierarchy; the handler decides what happens when the command is invoked and
//! reports back to the shell through an `Outcome`.

pub mod descriptor;
pub use descriptor::{CommandDescriptor, Handler};

pub mod echo;
pub mod exit;
pub mod help;

pub mod example {
    pub use super::echo::echo;
}

pub(crate) mod builtin {
    pub use super::exit::exit;
    pub use super::help::help;
}

/// Outcome is what a handler hands back to the shell once it has run.
///
/// Handlers never print or terminate the process themselves. The shell prints `Output` and
/// interprets `Exit` as a request to stop its run-loop with the given status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text the shell should print on behalf of the command.
    Output(String),
    /// The command ran and has nothing to say.
    Silent,
    /// The command asks the shell to terminate with the given status code.
    Exit(i32),
}

impl Outcome {
    /// Convenience constructor for `Outcome::Output`.
    pub fn output<S: Into<String>>(text: S) -> Outcome {
        Outcome::Output(text.into())
    }
}
