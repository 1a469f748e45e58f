use std::fmt;

use super::Outcome;
use crate::Result;

/// The type of closure a `CommandDescriptor` executes when it is invoked.
pub type Handler = Box<dyn Fn(&[String]) -> Result<Outcome>>;

/// A CommandDescriptor is the immutable record describing one invocable command.
///
/// It has a name, a set of aliases the command can also be invoked by, a description, a list of
/// declared argument names and a handler. The declared arguments are documentation only; they are
/// never checked against what the user actually typed.
pub struct CommandDescriptor {
    name: String,
    description: String,
    args: Vec<String>,
    aliases: Vec<String>,
    handler: Handler,
}

impl CommandDescriptor {
    /// Creates a new CommandDescriptor with the given name and handler, and no aliases,
    /// description or declared arguments.
    ///
    /// # Arguments
    /// * `name` - The name of the command. This is how users will execute the command.
    /// * `exec` - The closure that will be executed when this command is invoked.
    pub fn new<N, F>(name: N, exec: F) -> CommandDescriptor
    where
        N: Into<String>,
        F: Fn(&[String]) -> Result<Outcome> + 'static,
    {
        CommandDescriptor {
            name: name.into(),
            description: String::new(),
            args: Vec::new(),
            aliases: Vec::new(),
            handler: Box::new(exec),
        }
    }

    /// Sets the description of this command.
    pub fn with_description<D: Into<String>>(mut self, description: D) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the declared argument names of this command.
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the aliases of this command. Duplicates are dropped, keeping the first occurrence.
    pub fn with_aliases<I, A>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for alias in aliases.into_iter().map(Into::into) {
            if !deduped.contains(&alias) {
                deduped.push(alias);
            }
        }
        self.aliases = deduped;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Tests whether `key` invokes this command, i.e. it is exactly the name or one of the
    /// aliases. Comparison is case-sensitive.
    pub fn matches(&self, key: &str) -> bool {
        self.name == key || self.aliases.iter().any(|alias| alias == key)
    }

    /// Executes the handler with the given arguments.
    pub fn execute(&self, args: &[String]) -> Result<Outcome> {
        (self.handler)(args)
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("args", &self.args)
            .field("aliases", &self.aliases)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    fn silent() -> CommandDescriptor {
        CommandDescriptor::new("list", |_| Ok(Outcome::Silent))
    }

    #[test]
    fn matches_name() {
        assert!(silent().matches("list"));
    }

    #[test]
    fn matches_alias() {
        let cmd = silent().with_aliases(vec!["ls", "l"]);

        assert!(cmd.matches("ls"));
        assert!(cmd.matches("l"));
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let cmd = silent().with_aliases(vec!["ls"]);

        assert!(!cmd.matches("List"));
        assert!(!cmd.matches("LS"));
        assert!(!cmd.matches("lis"));
        assert!(!cmd.matches("list "));
        assert!(!cmd.matches(""));
    }

    #[test]
    fn duplicate_aliases_are_dropped() {
        let cmd = silent().with_aliases(vec!["ls", "l", "ls"]);

        assert_eq!(cmd.aliases(), &["ls".to_string(), "l".to_string()]);
    }

    #[test]
    fn execute_passes_args_through() {
        let cmd = CommandDescriptor::new("count", |args| {
            Ok(Outcome::output(format!("{}", args.len())))
        });

        let outcome = cmd
            .execute(&["a".to_string(), "b".to_string()])
            .expect("count never fails");

        assert_eq!(outcome, Outcome::Output("2".to_string()));
    }

    #[test]
    fn metadata() {
        let cmd = silent()
            .with_description("lists things")
            .with_args(vec!["filter"]);

        assert_eq!(cmd.name(), "list");
        assert_eq!(cmd.description(), "lists things");
        assert_eq!(cmd.args(), &["filter".to_string()]);
        assert!(cmd.aliases().is_empty());
    }
}
