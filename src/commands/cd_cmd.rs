use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult, ShellError};

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn description(&self) -> &'static str {
        "Change the shell working directory"
    }

    async fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<CommandResult, ShellError> {
        let target = match args.first() {
            Some(path) => path.as_str(),
            None => ctx.home,
        };
        ctx.fs.change_directory(target)?;
        Ok(CommandResult::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;
    use crate::commands::ErrorKind;
    use crate::fs::FileSystem;

    #[tokio::test]
    async fn test_cd_relative_and_parent() {
        let mut env = TestEnv::new();
        env.run(&CdCommand, &[".."]).await;
        assert_eq!(env.fs.current_path(), "/users");
        env.run(&CdCommand, &["guest"]).await;
        assert_eq!(env.fs.current_path(), "/users/guest");
    }

    #[tokio::test]
    async fn test_cd_without_args_goes_home() {
        let mut env = TestEnv::new();
        env.fs.change_directory("/system").unwrap();
        let result = env.run(&CdCommand, &[]).await;
        assert!(result.output.is_empty());
        assert_eq!(env.fs.current_path(), "/users/guest");
    }

    #[tokio::test]
    async fn test_cd_errors() {
        let mut env = TestEnv::new();
        let result = env.run(&CdCommand, &["missing"]).await;
        assert_eq!(result.error, Some(ErrorKind::NotFound));
        assert!(result.text().contains("missing"));

        let result = env.run(&CdCommand, &["notes.txt"]).await;
        assert_eq!(result.error, Some(ErrorKind::NotADirectory));
        assert_eq!(env.fs.current_path(), "/users/guest");
    }
}
