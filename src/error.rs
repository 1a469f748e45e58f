use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ShellError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("command name must not be empty")]
    EmptyName,
    #[error("command already registered: {cmd}")]
    AlreadyRegistered { cmd: String },
    #[error("{msg}")]
    General { msg: String },
}

impl ShellError {
    pub fn general<S: AsRef<str>>(msg: S) -> ShellError {
        ShellError::General {
            msg: msg.as_ref().to_string(),
        }
    }
}
