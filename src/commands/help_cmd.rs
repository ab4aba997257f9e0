use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult, ShellError};

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str { "help" }

    fn description(&self) -> &'static str {
        "Lists all available commands"
    }

    async fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<CommandResult, ShellError> {
        if let Some(name) = args.first() {
            return Ok(match ctx.registry.get(name) {
                Some(cmd) => CommandResult::system(format!("  {:<12} - {}", cmd.name(), cmd.description())),
                None => CommandResult::usage(format!("help: no such command: {}", name)),
            });
        }

        let lines: Vec<String> = ctx
            .registry
            .iter()
            .map(|(name, cmd)| format!("  {:<12} - {}", name, cmd.description()))
            .collect();

        Ok(CommandResult::system(format!("Available commands:\n{}", lines.join("\n"))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;
    use crate::commands::{ErrorKind, MessageKind};

    #[tokio::test]
    async fn test_help_lists_commands_in_order() {
        let mut env = TestEnv::new();
        let result = env.run(&HelpCommand, &[]).await;
        assert_eq!(result.kind, MessageKind::System);

        let text = result.text();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Available commands:"));
        assert_eq!(
            lines.next(),
            Some("  echo         - Prints the provided arguments to the output")
        );
        assert!(text.contains("  md           - Make directory"));
        assert_eq!(text.lines().count(), env.registry.len() + 1);
    }

    #[tokio::test]
    async fn test_help_single_command() {
        let mut env = TestEnv::new();
        let result = env.run(&HelpCommand, &["RD"]).await;
        assert_eq!(result.text(), "  rd           - Remove directory");

        let result = env.run(&HelpCommand, &["nope"]).await;
        assert_eq!(result.error, Some(ErrorKind::Usage));
    }
}
