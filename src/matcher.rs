use log::{debug, trace};

use crate::command::Outcome;
use crate::registry::CommandRegistry;
use crate::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::Result;

/// The outcome of one dispatch attempt.
#[derive(Debug)]
pub enum MatchResult {
    /// A command answered to the command key and its handler was run.
    Matched {
        /// The name of the matched command, even if it was invoked through an alias.
        name: String,
        /// Whatever the handler returned.
        outcome: Result<Outcome>,
    },
    /// Nothing answered to the command key, or there was no key at all. No handler was run.
    Unrecognized {
        /// The trimmed input line.
        input: String,
    },
}

impl MatchResult {
    /// Returns the name of the matched command, if there was one.
    pub fn name(&self) -> Option<&str> {
        match self {
            MatchResult::Matched { name, .. } => Some(name.as_str()),
            MatchResult::Unrecognized { .. } => None,
        }
    }
}

/// The Matcher resolves input lines against a `CommandRegistry` and dispatches to the handler of
/// whichever command matches.
pub struct Matcher<T = WhitespaceTokenizer> {
    registry: CommandRegistry,
    tokenizer: T,
}

impl Matcher<WhitespaceTokenizer> {
    /// Constructs a new `Matcher` over the given registry, splitting lines on whitespace.
    pub fn new(registry: CommandRegistry) -> Matcher<WhitespaceTokenizer> {
        Matcher::with_tokenizer(registry, WhitespaceTokenizer::new())
    }
}

impl<T: Tokenizer> Matcher<T> {
    /// Constructs a new `Matcher` over the given registry, using a custom tokenizer.
    pub fn with_tokenizer(registry: CommandRegistry, tokenizer: T) -> Matcher<T> {
        Matcher {
            registry,
            tokenizer,
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Matches the given line against the registry.
    ///
    /// The first token is the command key, the rest are arguments. The first command, in
    /// registration order, whose name or alias equals the key exactly has its handler invoked
    /// synchronously with the arguments. Whatever the handler returns, including errors and exit
    /// requests, is handed back untouched in the `MatchResult`.
    ///
    /// Empty or whitespace-only lines have no key and are `Unrecognized`.
    ///
    /// # Arguments
    /// `line` - The raw input line. Surrounding whitespace is ignored.
    pub fn match_line(&self, line: &str) -> MatchResult {
        let trimmed = line.trim();
        let tokenization = self.tokenizer.tokenize(trimmed);
        trace!("tokenized {:?} into {:?}", trimmed, tokenization);

        let key = match tokenization.key {
            Some(key) => key,
            None => {
                return MatchResult::Unrecognized {
                    input: trimmed.to_string(),
                }
            }
        };

        match self.registry.get(key) {
            Some(cmd) => {
                let args = tokenization.owned_args();
                debug!("dispatching '{}' to '{}' with {:?}", key, cmd.name(), args);
                MatchResult::Matched {
                    name: cmd.name().to_string(),
                    outcome: cmd.execute(&args),
                }
            }
            None => {
                debug!("no command answers to '{}'", key);
                MatchResult::Unrecognized {
                    input: trimmed.to_string(),
                }
            }
        }
    }
}
