use super::{CommandDescriptor, Outcome};

/// Renders the help listing for the given command names.
fn render(names: &[String]) -> String {
    format!("Available commands: {}", names.join(", "))
}

/// Creates the `help` command (alias `h`).
///
/// The listing is rendered once, from the names handed in at construction, and the command prints
/// that same static text on every invocation. Any arguments it is given are ignored.
///
/// # Arguments
/// `names` - The names of every command that will be registered alongside this one.
pub fn help(names: &[String]) -> CommandDescriptor {
    let listing = render(names);
    CommandDescriptor::new("help", move |_| Ok(Outcome::output(listing.as_str())))
        .with_description("Display this help message")
        .with_aliases(vec!["h"])
}
