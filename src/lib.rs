//! A crate for a minimal interactive shell.
//!
//! A `Shell` reads a line, finds the registered command whose name or alias is the line's first
//! word, and runs that command's handler with the remaining words as arguments. Commands are
//! plain `CommandDescriptor`'s held in a `CommandRegistry`; see `CommandRegistry::with_builtins`
//! for the `help` and `exit` commands every shell gets.

use std::result;

pub mod command;
pub mod config;
pub mod error;
pub mod matcher;
pub mod registry;
pub mod shell;
pub mod tokenizer;

pub use command::{CommandDescriptor, Outcome};
pub use config::ShellConfig;
pub use matcher::{MatchResult, Matcher};
pub use registry::CommandRegistry;
pub use shell::Shell;

pub type Result<T> = result::Result<T, error::ShellError>;

/// Creates a `CommandDescriptor` from the given name, optional aliases and closure.
///
/// ```
/// use minish::{cmd, Outcome};
///
/// let greet = cmd!("greet", ["hi", "hello"], |args| {
///     Ok(Outcome::Output(format!("hello, {}", args.join(" "))))
/// });
/// assert!(greet.matches("hi"));
/// ```
#[macro_export]
macro_rules! cmd {
    ( $name:expr, [ $( $alias:expr ),+ $(,)? ], $exec:expr ) => {
        $crate::command::CommandDescriptor::new($name, $exec).with_aliases(vec![$( $alias, )+])
    };
    ( $name:expr, $exec:expr ) => {
        $crate::command::CommandDescriptor::new($name, $exec)
    };
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;

    use super::command::example::echo;
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn cmd_macro() {
        let plain = cmd!("list", |_| Ok(Outcome::Silent));
        let aliased = cmd!("remove", ["rm", "del",], |_| Ok(Outcome::Silent));

        assert!(plain.aliases().is_empty());
        assert_eq!(aliased.aliases(), &["rm".to_string(), "del".to_string()]);
    }

    #[test]
    fn stateful_commands() {
        let lst: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        let add_lst = lst.clone();
        let list_lst = lst.clone();
        let registry = CommandRegistry::with_builtins(vec![
            echo(),
            cmd!("add", ["a"], move |args| {
                add_lst.borrow_mut().extend(args.iter().cloned());
                Ok(Outcome::Silent)
            }),
            cmd!("list", move |_| {
                Ok(Outcome::Output(format!(
                    "Current: [{}]",
                    list_lst
                        .borrow()
                        .iter()
                        .map(|f| format!("{:?}", f))
                        .collect::<Vec<String>>()
                        .join(", ")
                )))
            }),
        ])
        .unwrap();

        let mut shell = Shell::new(
            ShellConfig::default().with_color(false),
            registry,
            Cursor::new(b"add title\na isbn eu\nlist\nquit\n".to_vec()),
            Vec::new(),
        );

        assert_eq!(shell.run().unwrap(), 0);
        assert_eq!(*lst.borrow(), vec!["title", "isbn", "eu"]);

        let output = String::from_utf8(shell.into_output()).unwrap();
        assert!(output.contains("Current: [\"title\", \"isbn\", \"eu\"]\nExecuting command: list"));
    }
}
