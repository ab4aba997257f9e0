use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult, ShellError};
use crate::fs::VfsError;

pub struct EditCommand;

#[async_trait]
impl Command for EditCommand {
    fn name(&self) -> &'static str {
        "edit"
    }

    fn description(&self) -> &'static str {
        "Replace a file with the next line typed. Use -a to append instead."
    }

    async fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<CommandResult, ShellError> {
        let append = args.iter().any(|a| a == "-a");
        let Some(file) = args.iter().find(|a| !a.starts_with('-')).cloned() else {
            return Ok(CommandResult::usage("Usage: edit <filename> [-a]"));
        };

        // Fail before entering edit mode rather than after the line is typed.
        if let Ok(info) = ctx.fs.stat(&file) {
            if info.is_directory() {
                return Err(VfsError::IsADirectory { path: file }.into());
            }
        }

        let prompt = format!("Editing {}. Type the new line below:", file);
        Ok(CommandResult::system(prompt).then(move |line, ctx| {
            let content = format!("{}\n", line);
            if append {
                ctx.fs.append_file(&file, &content)?;
            } else {
                ctx.fs.write_file(&file, &content)?;
            }
            Ok(CommandResult::system(format!("Saved {}", file)))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;
    use crate::commands::ErrorKind;
    use crate::fs::FileSystem;

    #[tokio::test]
    async fn test_edit_replaces_content() {
        let mut env = TestEnv::new();
        let result = env.run(&EditCommand, &["notes.txt"]).await;
        assert!(result.continuation.is_some());
        let saved = env.resume(result, "Buy bread instead.");
        assert_eq!(saved.text(), "Saved notes.txt");
        assert_eq!(env.fs.read_file("notes.txt").unwrap(), "Buy bread instead.\n");
    }

    #[tokio::test]
    async fn test_edit_append_creates_file() {
        let mut env = TestEnv::new();
        let result = env.run(&EditCommand, &["-a", "journal"]).await;
        env.resume(result, "day one");
        let result = env.run(&EditCommand, &["journal", "-a"]).await;
        env.resume(result, "day two");
        assert_eq!(env.fs.read_file("journal").unwrap(), "day one\nday two\n");
    }

    #[tokio::test]
    async fn test_edit_errors() {
        let mut env = TestEnv::new();
        assert_eq!(env.run(&EditCommand, &[]).await.error, Some(ErrorKind::Usage));

        let result = env.run(&EditCommand, &["/system"]).await;
        assert_eq!(result.error, Some(ErrorKind::IsADirectory));
        assert!(result.continuation.is_none());

        let result = env.run(&EditCommand, &["/missing/file"]).await;
        let failed = env.resume(result, "text");
        assert_eq!(failed.error, Some(ErrorKind::NotFound));
    }
}
