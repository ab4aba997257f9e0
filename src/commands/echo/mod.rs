// src/commands/echo/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult, ShellError};

pub struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn description(&self) -> &'static str {
        "Prints the provided arguments to the output"
    }

    async fn execute(&self, args: &[String], _ctx: &mut CommandContext<'_>) -> Result<CommandResult, ShellError> {
        if args.is_empty() {
            return Ok(CommandResult::empty());
        }
        Ok(CommandResult::success(args.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;
    use crate::commands::Output;

    #[tokio::test]
    async fn test_echo_joins_args() {
        let mut env = TestEnv::new();
        let result = env.run(&EchoCommand, &["hello", "world"]).await;
        assert_eq!(result.output, Output::Text("hello world".to_string()));
        assert!(!result.is_error());
    }

    #[tokio::test]
    async fn test_echo_no_args() {
        let mut env = TestEnv::new();
        let result = env.run(&EchoCommand, &[]).await;
        assert_eq!(result.output, Output::Empty);
    }
}
