use super::{CommandDescriptor, Outcome};

/// The status code the `exit` command terminates the shell with.
pub const EXIT_SUCCESS: i32 = 0;

/// Creates the `exit` command (alias `quit`), which asks the shell to terminate with status 0.
///
/// It does not stop the process itself; it returns `Outcome::Exit` and leaves shutting down to
/// the shell's run-loop.
pub fn exit() -> CommandDescriptor {
    CommandDescriptor::new("exit", |_| Ok(Outcome::Exit(EXIT_SUCCESS)))
        .with_description("Exit the interactive shell")
        .with_aliases(vec!["quit"])
}
