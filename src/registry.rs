use std::slice::Iter;

use log::debug;

use crate::command::builtin::{exit, help};
use crate::command::CommandDescriptor;
use crate::error::ShellError;
use crate::Result;

/// An ordered, fixed collection of `CommandDescriptor`'s.
///
/// Registration order is match precedence: when several commands answer to the same key, the
/// earliest registered one wins. Names must be non-empty and unique, but aliases are not checked
/// against each other or against names.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    cmds: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Creates a new `CommandRegistry` from the given `Vec` of `CommandDescriptor`'s.
    ///
    /// # Errors
    /// `ShellError::EmptyName` if a command has an empty name, `ShellError::AlreadyRegistered` if
    /// two commands share a name.
    pub fn new_from_vec(cmds: Vec<CommandDescriptor>) -> Result<Self> {
        let mut registry = CommandRegistry {
            cmds: Vec::with_capacity(cmds.len()),
        };
        for cmd in cmds {
            registry.add(cmd)?;
        }

        Ok(registry)
    }

    /// Creates a new `CommandRegistry` holding the `help` and `exit` builtins followed by `extra`.
    ///
    /// The help listing names every command in the resulting registry.
    pub fn with_builtins(extra: Vec<CommandDescriptor>) -> Result<Self> {
        let mut names = vec![String::from("help"), String::from("exit")];
        names.extend(extra.iter().map(|cmd| cmd.name().to_string()));

        let mut cmds = Vec::with_capacity(extra.len() + 2);
        cmds.push(help(&names));
        cmds.push(exit());
        cmds.extend(extra);

        CommandRegistry::new_from_vec(cmds)
    }

    fn add(&mut self, cmd: CommandDescriptor) -> Result<()> {
        if cmd.name().is_empty() {
            return Err(ShellError::EmptyName);
        }
        if self.cmds.iter().any(|existing| existing.name() == cmd.name()) {
            return Err(ShellError::AlreadyRegistered {
                cmd: cmd.name().to_string(),
            });
        }

        debug!(
            "registering command '{}' (aliases: {:?})",
            cmd.name(),
            cmd.aliases()
        );
        self.cmds.push(cmd);

        Ok(())
    }

    /// Retrieves the first command, in registration order, whose name or one of whose aliases is
    /// exactly `key`.
    pub fn get(&self, key: &str) -> Option<&CommandDescriptor> {
        self.cmds.iter().find(|cmd| cmd.matches(key))
    }

    /// Tests for existence of a command answering to `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Returns the command names, in registration order. Aliases are not included.
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|cmd| cmd.name().to_string()).collect()
    }

    /// Produces an iterator over the commands, in registration order.
    pub fn iter(&self) -> Iter<'_, CommandDescriptor> {
        self.cmds.iter()
    }
}

impl<'a> IntoIterator for &'a CommandRegistry {
    type Item = &'a CommandDescriptor;
    type IntoIter = Iter<'a, CommandDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
