use super::{CommandDescriptor, Outcome};

/// Creates the `echo` command (alias `say`).
///
/// As the name suggests, this command simply echoes back whatever arguments it receives, joined
/// by single spaces. It is mostly here to have something other than the builtins to play with.
pub fn echo() -> CommandDescriptor {
    CommandDescriptor::new("echo", |args| Ok(Outcome::output(args.join(" "))))
        .with_description("Print the arguments back")
        .with_args(vec!["words..."])
        .with_aliases(vec!["say"])
}
