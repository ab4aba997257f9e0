use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult, Output, ShellError, Span};
use crate::fs::{sort_by_name, FileSystem};

pub struct TreeCommand;

#[derive(Default)]
struct TreeResult {
    spans: Vec<Span>,
    dir_count: usize,
    file_count: usize,
}

fn child_path(parent: &str, name: &str) -> String {
    if parent == "." {
        name.to_string()
    } else if parent.ends_with('/') {
        format!("{}{}", parent, name)
    } else {
        format!("{}/{}", parent, name)
    }
}

fn build_tree(fs: &dyn FileSystem, path: &str, prefix: &str, result: &mut TreeResult) {
    // Unreadable subdirectories are skipped rather than aborting the walk.
    let Ok(mut nodes) = fs.list_children(Some(path)) else {
        return;
    };
    sort_by_name(&mut nodes);

    for (idx, node) in nodes.iter().enumerate() {
        let is_last = idx == nodes.len() - 1;
        let connector = if is_last { "└── " } else { "├── " };
        result.spans.push(Span::plain(format!("{}{}", prefix, connector)));

        if node.is_directory() {
            result.dir_count += 1;
            result.spans.push(Span::directory(node.name.clone()));
            result.spans.push(Span::plain("\n"));
            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            build_tree(fs, &child_path(path, &node.name), &child_prefix, result);
        } else {
            result.file_count += 1;
            result.spans.push(Span::plain(format!("{}\n", node.name)));
        }
    }
}

#[async_trait]
impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn description(&self) -> &'static str {
        "List contents of directories in a tree-like format"
    }

    async fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<CommandResult, ShellError> {
        let start = args.first().map(String::as_str).unwrap_or(".");
        ctx.fs.list_children(Some(start))?;

        let mut result = TreeResult::default();
        result.spans.push(Span::directory(start));
        result.spans.push(Span::plain("\n"));
        build_tree(&*ctx.fs, start, "", &mut result);

        result.spans.push(Span::plain(format!(
            "\n{} directories, {} files",
            result.dir_count, result.file_count
        )));
        Ok(CommandResult::success(Output::Styled(result.spans)))
    }
}
