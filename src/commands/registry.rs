// src/commands/registry.rs
use indexmap::IndexMap;
use super::types::Command;

/// Commands keyed by lower-cased name, kept in registration order.
pub struct CommandRegistry {
    commands: IndexMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_lowercase(), cmd);
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(&name.to_lowercase()).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Command)> {
        self.commands.iter().map(|(name, cmd)| (name.as_str(), cmd.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::date::DateCommand;
use super::echo::EchoCommand;
use super::edit_cmd::EditCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::md_cmd::MdCommand;
use super::motd_cmd::MotdCommand;
use super::pwd::PwdCommand;
use super::rd_cmd::RdCommand;
use super::tree_cmd::TreeCommand;
use super::whoami_cmd::WhoamiCommand;

/// Register the built-in command set, in the order `help` lists it.
pub fn register_defaults(registry: &mut CommandRegistry) {
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(DateCommand));
    registry.register(Box::new(WhoamiCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(MotdCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(MdCommand));
    registry.register(Box::new(RdCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(TreeCommand));
    registry.register(Box::new(EditCommand));
}

pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_defaults(&mut registry);
    registry
}
