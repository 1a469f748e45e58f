//! A module for the shell portion of minish.
//!
//! This module exposes the `Shell` struct, the run-loop that ties everything together: it prints
//! a banner, then repeatedly prompts, reads one line, hands it to the `Matcher` and reports what
//! happened. It only stops when a command asks it to, or when its input runs dry.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use colored::{ColoredString, Colorize};
use log::{debug, info, warn};

use crate::command::exit::EXIT_SUCCESS;
use crate::command::Outcome;
use crate::config::ShellConfig;
use crate::matcher::{MatchResult, Matcher};
use crate::registry::CommandRegistry;
use crate::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::Result;

/// The lifecycle of a `Shell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The shell has not yet started, or is in its run-loop.
    Running,
    /// A command asked the shell to stop, with the given status code.
    Terminated(i32),
}

/// The shell.
///
/// It is constructed with a `ShellConfig`, a `CommandRegistry`, and the reader and writer it
/// talks to the user through. Execution is done through a run-loop of input/output, see `run()`.
pub struct Shell<R, W, T = WhitespaceTokenizer> {
    config: ShellConfig,
    matcher: Matcher<T>,
    input: R,
    output: W,
    state: State,
}

impl Shell<StdinLock<'static>, Stdout, WhitespaceTokenizer> {
    /// Constructs a new shell that reads from stdin and writes to stdout.
    pub fn stdio(config: ShellConfig, registry: CommandRegistry) -> Self {
        Shell::new(config, registry, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Shell<R, W, WhitespaceTokenizer> {
    /// Constructs a new shell.
    ///
    /// # Arguments
    /// `config` - Prompt, banner and styling.
    /// `registry` - The commands this shell can dispatch to.
    /// `input` - Where lines are read from.
    /// `output` - Where the banner, prompts and results are written to.
    pub fn new(config: ShellConfig, registry: CommandRegistry, input: R, output: W) -> Self {
        Shell::with_matcher(config, Matcher::new(registry), input, output)
    }
}

impl<R: BufRead, W: Write, T: Tokenizer> Shell<R, W, T> {
    /// Constructs a new shell around an already configured `Matcher`.
    pub fn with_matcher(config: ShellConfig, matcher: Matcher<T>, input: R, output: W) -> Self {
        Shell {
            config,
            matcher,
            input,
            output,
            state: State::Running,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn registry(&self) -> &CommandRegistry {
        self.matcher.registry()
    }

    /// Consumes the shell, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Executes the shell's run-loop.
    ///
    /// Prints the welcome banner once, then loops: prompt, read a single line, evaluate it. This
    /// will run until a command returns `Outcome::Exit`, whose code is returned, or until the input
    /// is exhausted, in which case the code is 0.
    ///
    /// Unrecognized commands and failing commands are reported and do _not_ cause a return from
    /// this method. Failing to read input or write output does.
    pub fn run(&mut self) -> Result<i32> {
        if let State::Terminated(code) = self.state {
            return Ok(code);
        }

        let banner = self.styled(self.config.welcome.clone(), |s| s.bold());
        writeln!(self.output, "{}", banner)?;

        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    info!("end of input, terminating");
                    // Leave the terminal on a fresh line after the dangling prompt.
                    writeln!(self.output)?;
                    self.output.flush()?;
                    self.state = State::Terminated(EXIT_SUCCESS);
                    return Ok(EXIT_SUCCESS);
                }
            };

            if let Some(code) = self.eval(&line)? {
                return Ok(code);
            }
        }
    }

    /// Eval executes a single iteration of the run-loop on the given line, minus the prompt and
    /// the read.
    ///
    /// A terminated shell dispatches nothing; it keeps answering with its exit code.
    ///
    /// # Returns
    /// `Ok(Some(code))` if the shell is, or has just become, terminated, `Ok(None)` otherwise.
    pub fn eval(&mut self, line: &str) -> Result<Option<i32>> {
        if let State::Terminated(code) = self.state {
            debug!("ignoring {:?}, shell already terminated", line);
            return Ok(Some(code));
        }

        let result = self.matcher.match_line(line);

        match result {
            MatchResult::Matched { name, outcome } => match outcome {
                Ok(Outcome::Exit(code)) => {
                    info!("'{}' requested termination with status {}", name, code);
                    self.state = State::Terminated(code);
                    self.output.flush()?;
                    return Ok(Some(code));
                }
                Ok(Outcome::Output(text)) => {
                    writeln!(self.output, "{}", text)?;
                    writeln!(self.output, "Executing command: {}", name)?;
                }
                Ok(Outcome::Silent) => {
                    writeln!(self.output, "Executing command: {}", name)?;
                }
                Err(err) => {
                    warn!("'{}' failed: {:?}", name, err);
                    let msg = self.styled(format!("error: {}: {}", name, err), |s| s.red());
                    writeln!(self.output, "{}", msg)?;
                }
            },
            MatchResult::Unrecognized { input } if input.is_empty() => {
                let msg = self.styled(String::from("No command entered"), |s| s.yellow());
                writeln!(self.output, "{}", msg)?;
            }
            MatchResult::Unrecognized { input } => {
                let msg = self.styled(format!("Unknown command: '{}'", input), |s| s.yellow());
                writeln!(self.output, "{}", msg)?;
            }
        }
        self.output.flush()?;

        Ok(None)
    }

    /// Reads exactly one line from the input, with its line terminator stripped. Returns `None`
    /// once the input is exhausted. Bytes that are not valid UTF-8 are replaced rather than
    /// rejected.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        debug!("read line {:?}", line);

        Ok(Some(line))
    }

    fn styled<F>(&self, text: String, style: F) -> String
    where
        F: FnOnce(&str) -> ColoredString,
    {
        if self.config.color {
            style(&text).to_string()
        } else {
            text
        }
    }
}
