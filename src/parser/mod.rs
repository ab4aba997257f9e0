//! Command line parser
//!
//! Splits a raw input line into a command name and arguments, and strips
//! a single output redirection (`> file` or `>> file`).

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Syntax error: expected filename after {operator}")]
    MissingFilename { operator: RedirectMode },

    #[error("Syntax error: expected command before {operator}")]
    MissingCommand { operator: RedirectMode },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    /// `>`
    Overwrite,
    /// `>>`
    Append,
}

impl RedirectMode {
    pub fn operator(self) -> &'static str {
        match self {
            RedirectMode::Overwrite => ">",
            RedirectMode::Append => ">>",
        }
    }
}

impl fmt::Display for RedirectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operator())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    pub mode: RedirectMode,
}

/// A parsed, non-blank input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Command name with its original casing
    pub name: String,
    pub args: Vec<String>,
    pub redirect: Option<Redirect>,
}

/// Split a line on runs of whitespace.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

/// Parse a raw line. Returns `Ok(None)` for a blank line.
///
/// `>>` is looked for first, then `>`; only the first occurrence of the
/// chosen operator is treated as a redirection and it must be a standalone
/// token followed by a filename.
pub fn parse_line(line: &str) -> Result<Option<CommandLine>, ParseError> {
    let mut tokens = tokenize(line);
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut redirect = None;
    let found = [RedirectMode::Append, RedirectMode::Overwrite]
        .into_iter()
        .find_map(|mode| {
            tokens
                .iter()
                .position(|t| t == mode.operator())
                .map(|idx| (idx, mode))
        });

    if let Some((idx, mode)) = found {
        if idx + 1 >= tokens.len() {
            return Err(ParseError::MissingFilename { operator: mode });
        }
        let path = tokens.remove(idx + 1);
        tokens.remove(idx);
        redirect = Some(Redirect { path, mode });
        if tokens.is_empty() {
            return Err(ParseError::MissingCommand { operator: mode });
        }
    }

    let name = tokens.remove(0);
    Ok(Some(CommandLine {
        name,
        args: tokens,
        redirect,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> CommandLine {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  echo \t a   b  "), vec!["echo", "a", "b"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line(" \t "), Ok(None));
    }

    #[test]
    fn test_plain_command() {
        let cmd = parse("LS -l /users");
        assert_eq!(cmd.name, "LS");
        assert_eq!(cmd.args, vec!["-l", "/users"]);
        assert_eq!(cmd.redirect, None);
    }

    #[test]
    fn test_overwrite_redirect() {
        let cmd = parse("echo hi > out.txt");
        assert_eq!(cmd.name, "echo");
        assert_eq!(cmd.args, vec!["hi"]);
        assert_eq!(
            cmd.redirect,
            Some(Redirect { path: "out.txt".to_string(), mode: RedirectMode::Overwrite })
        );
    }

    #[test]
    fn test_append_redirect_wins_over_overwrite() {
        let cmd = parse("echo a > b >> log");
        assert_eq!(cmd.args, vec!["a", ">", "b"]);
        assert_eq!(
            cmd.redirect,
            Some(Redirect { path: "log".to_string(), mode: RedirectMode::Append })
        );
    }

    #[test]
    fn test_redirect_in_middle_keeps_trailing_args() {
        let cmd = parse("echo a > out b");
        assert_eq!(cmd.args, vec!["a", "b"]);
        assert_eq!(cmd.redirect.unwrap().path, "out");
    }

    #[test]
    fn test_attached_operator_is_not_a_redirect() {
        let cmd = parse("echo a>b");
        assert_eq!(cmd.args, vec!["a>b"]);
        assert_eq!(cmd.redirect, None);
    }

    #[test]
    fn test_missing_filename() {
        let err = parse_line("echo hi >").unwrap_err();
        assert_eq!(err, ParseError::MissingFilename { operator: RedirectMode::Overwrite });
        assert_eq!(err.to_string(), "Syntax error: expected filename after >");

        let err = parse_line("echo hi >>").unwrap_err();
        assert_eq!(err.to_string(), "Syntax error: expected filename after >>");
    }

    #[test]
    fn test_missing_command() {
        let err = parse_line("> out.txt").unwrap_err();
        assert_eq!(err, ParseError::MissingCommand { operator: RedirectMode::Overwrite });
    }
}
