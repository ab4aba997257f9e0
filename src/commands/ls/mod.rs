// src/commands/ls/mod.rs
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::time::SystemTime;
use crate::commands::{Command, CommandContext, CommandResult, Output, ShellError, Span};
use crate::fs::{sort_by_name, NodeInfo};

pub struct LsCommand;

fn format_time(mtime: SystemTime) -> String {
    let local: DateTime<Local> = mtime.into();
    local.format("%b %-d %H:%M").to_string()
}

fn name_span(node: &NodeInfo) -> Span {
    if node.is_directory() {
        Span::directory(format!("{}/", node.name))
    } else {
        Span::plain(node.name.clone())
    }
}

fn long_prefix(node: &NodeInfo) -> String {
    format!(
        "{} 1 {:<6} {:<6} {:>5} {} ",
        node.permissions,
        node.owner,
        node.group,
        node.size,
        format_time(node.modified)
    )
}

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn description(&self) -> &'static str {
        "List directory contents. Use -l for long listing."
    }

    async fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<CommandResult, ShellError> {
        let long = args.iter().any(|a| a.starts_with('-') && a.contains('l'));
        let target = args.iter().find(|a| !a.starts_with('-')).map(String::as_str);

        let mut nodes = ctx.fs.list_children(target)?;
        if nodes.is_empty() {
            return Ok(CommandResult::success("(empty)"));
        }
        sort_by_name(&mut nodes);

        let mut spans = Vec::with_capacity(nodes.len() * 2);
        for (idx, node) in nodes.iter().enumerate() {
            if long {
                if idx > 0 {
                    spans.push(Span::plain("\n"));
                }
                spans.push(Span::plain(long_prefix(node)));
            } else if idx > 0 {
                spans.push(Span::plain("  "));
            }
            spans.push(name_span(node));
        }

        Ok(CommandResult::success(Output::Styled(spans)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;
    use crate::commands::{ErrorKind, Style};
    use crate::fs::FileSystem;

    #[tokio::test]
    async fn test_ls_sorted_case_insensitive() {
        let mut env = TestEnv::new();
        env.fs.write_file("Zeta", "").unwrap();
        env.fs.make_directory("alpha").unwrap();
        let result = env.run(&LsCommand, &[]).await;
        assert_eq!(result.text(), "alpha/  notes.txt  Zeta");
    }

    #[tokio::test]
    async fn test_ls_marks_directories() {
        let mut env = TestEnv::new();
        let result = env.run(&LsCommand, &["/"]).await;
        let Output::Styled(spans) = &result.output else {
            panic!("expected styled output");
        };
        assert!(spans.iter().any(|s| s.text == "users/" && s.style == Style::Directory));
        assert_eq!(result.text(), "dev/  system/  users/");
    }

    #[tokio::test]
    async fn test_ls_long_format() {
        let mut env = TestEnv::new();
        let result = env.run(&LsCommand, &["-l", "/system"]).await;
        let text = result.text();
        assert!(text.starts_with("-rw-r--r-- 1 root   root      26 "));
        assert!(text.ends_with(" readme"));
    }

    #[tokio::test]
    async fn test_ls_empty_directory() {
        let mut env = TestEnv::new();
        env.fs.make_directory("void").unwrap();
        let result = env.run(&LsCommand, &["void"]).await;
        assert_eq!(result.text(), "(empty)");
    }

    #[tokio::test]
    async fn test_ls_errors() {
        let mut env = TestEnv::new();
        assert_eq!(env.run(&LsCommand, &["missing"]).await.error, Some(ErrorKind::NotFound));
        assert_eq!(env.run(&LsCommand, &["notes.txt"]).await.error, Some(ErrorKind::NotADirectory));
    }
}
