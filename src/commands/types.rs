// src/commands/types.rs
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::registry::CommandRegistry;
use crate::fs::{FileSystem, VfsError};
use crate::parser::ParseError;
use crate::store::{KeyValueStore, StoreError};

/// Severity tag attached to every result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Output,
    Error,
    System,
}

/// Failure categories reported alongside error results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    NotADirectory,
    IsADirectory,
    NotEmpty,
    AlreadyExists,
    Protected,
    PathNotFound,
    InvalidPath,
    SyntaxError,
    CommandNotFound,
    RedirectUnsupported,
    Usage,
    UnknownFailure,
}

impl From<&VfsError> for ErrorKind {
    fn from(err: &VfsError) -> Self {
        match err {
            VfsError::NotFound { .. } => ErrorKind::NotFound,
            VfsError::NotADirectory { .. } => ErrorKind::NotADirectory,
            VfsError::IsADirectory { .. } => ErrorKind::IsADirectory,
            VfsError::NotEmpty { .. } => ErrorKind::NotEmpty,
            VfsError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            VfsError::Protected { .. } => ErrorKind::Protected,
            VfsError::PathNotFound { .. } => ErrorKind::PathNotFound,
            VfsError::InvalidPath { .. } => ErrorKind::InvalidPath,
        }
    }
}

/// Errors a command (or the dispatcher around it) can fail with
#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Fs(#[from] VfsError),

    #[error(transparent)]
    Syntax(#[from] ParseError),

    #[error("Command not found: {name}. Type 'help' for valid commands.")]
    CommandNotFound { name: String },

    #[error("Error: Cannot redirect non-text output")]
    RedirectUnsupported,

    #[error("Failed to write to {path}: {source}")]
    Redirect {
        path: String,
        #[source]
        source: VfsError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ShellError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShellError::Fs(e) | ShellError::Redirect { source: e, .. } => e.into(),
            ShellError::Syntax(_) => ErrorKind::SyntaxError,
            ShellError::CommandNotFound { .. } => ErrorKind::CommandNotFound,
            ShellError::RedirectUnsupported => ErrorKind::RedirectUnsupported,
            ShellError::Store(_) => ErrorKind::UnknownFailure,
        }
    }
}

/// Presentation hint for a piece of styled output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Plain,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: Style::Plain }
    }

    pub fn directory(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: Style::Directory }
    }
}

/// Terminal actions that have no textual form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    ClearScreen,
}

/// What a command hands back for display.
///
/// `Text` and `Styled` output can be redirected into a file (styled spans
/// are written as plain text). `Control` output only means something to a
/// terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Empty,
    Text(String),
    Styled(Vec<Span>),
    Control(Control),
}

impl Output {
    pub fn is_empty(&self) -> bool {
        match self {
            Output::Empty => true,
            Output::Text(text) => text.is_empty(),
            Output::Styled(spans) => spans.iter().all(|s| s.text.is_empty()),
            Output::Control(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Plain text suitable for a file, or `None` for terminal-only output.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Output::Control(_) => None,
            other => Some(other.render(false)),
        }
    }

    /// Render for a terminal; directories are bold blue when `color` is set.
    pub fn render(&self, color: bool) -> String {
        match self {
            Output::Empty | Output::Control(_) => String::new(),
            Output::Text(text) => text.clone(),
            Output::Styled(spans) => spans
                .iter()
                .map(|span| match span.style {
                    Style::Directory if color => format!("\x1B[1;34m{}\x1B[0m", span.text),
                    _ => span.text.clone(),
                })
                .collect(),
        }
    }
}

impl From<String> for Output {
    fn from(s: String) -> Self {
        Output::Text(s)
    }
}

impl From<&str> for Output {
    fn from(s: &str) -> Self {
        Output::Text(s.to_string())
    }
}

/// Receives the next raw input line in place of normal dispatch
pub type Continuation =
    Box<dyn FnOnce(String, &mut CommandContext<'_>) -> Result<CommandResult, ShellError> + Send>;

/// 命令执行结果
pub struct CommandResult {
    pub output: Output,
    pub kind: MessageKind,
    pub error: Option<ErrorKind>,
    pub continuation: Option<Continuation>,
}

impl CommandResult {
    pub fn new(output: Output, kind: MessageKind) -> Self {
        Self { output, kind, error: None, continuation: None }
    }

    pub fn empty() -> Self {
        Self::new(Output::Empty, MessageKind::Output)
    }

    pub fn success(output: impl Into<Output>) -> Self {
        Self::new(output.into(), MessageKind::Output)
    }

    pub fn system(output: impl Into<Output>) -> Self {
        Self::new(output.into(), MessageKind::System)
    }

    /// Usage or argument error reported by the command itself
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            output: Output::Text(message.into()),
            kind: MessageKind::Error,
            error: Some(ErrorKind::Usage),
            continuation: None,
        }
    }

    pub fn from_error(err: &ShellError) -> Self {
        Self {
            output: Output::Text(err.to_string()),
            kind: MessageKind::Error,
            error: Some(err.kind()),
            continuation: None,
        }
    }

    /// Route the next input line to `next` instead of the dispatcher.
    pub fn then<F>(mut self, next: F) -> Self
    where
        F: FnOnce(String, &mut CommandContext<'_>) -> Result<CommandResult, ShellError> + Send + 'static,
    {
        self.continuation = Some(Box::new(next));
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }

    /// Output as plain text, dropping any styling
    pub fn text(&self) -> String {
        self.output.render(false)
    }
}

impl fmt::Debug for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandResult")
            .field("output", &self.output)
            .field("kind", &self.kind)
            .field("error", &self.error)
            .field("continuation", &self.continuation.is_some())
            .finish()
    }
}

/// 命令执行上下文
pub struct CommandContext<'a> {
    pub fs: &'a mut dyn FileSystem,
    pub registry: &'a CommandRegistry,
    pub store: &'a mut dyn KeyValueStore,
    pub user: &'a str,
    pub home: &'a str,
}

/// 命令 trait
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    async fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<CommandResult, ShellError>;
}
