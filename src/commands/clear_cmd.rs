use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult, Control, MessageKind, Output, ShellError};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "Clears the terminal screen"
    }

    // The front end wipes its history when it sees the control output.
    async fn execute(&self, _args: &[String], _ctx: &mut CommandContext<'_>) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::new(Output::Control(Control::ClearScreen), MessageKind::System))
    }
}
