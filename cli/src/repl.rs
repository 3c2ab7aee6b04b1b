//! Line-oriented front end over `TodoController`.
//!
//! The initial list loads at startup. `list` and `toggle` run as detached
//! tasks, so the prompt comes back while the request is in flight. `add`
//! and `delete` run inline: `add` reads the shared form and `delete` asks
//! for confirmation on the same stdin.

use std::sync::Arc;

use anyhow::Result;
use todo_core::{Confirm, Notifier, TodoController, Transport};
use tracing::debug;

use crate::terminal::LineReader;

pub const HELP: &str = "\
commands:
  list                            reload the list
  add <title> [| <description>]   create a todo
  toggle <n>                      mark row n complete / unmark it
  delete <n>                      delete row n
  help                            show this message
  quit                            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add { title: String, description: String },
    Toggle(usize),
    Delete(usize),
    Help,
    Quit,
}

impl Command {
    /// `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let command = match word {
            "list" | "ls" => Command::List,
            "add" => {
                let (title, description) = rest.split_once('|').unwrap_or((rest, ""));
                Command::Add {
                    title: title.to_string(),
                    description: description.to_string(),
                }
            }
            "toggle" => Command::Toggle(row_number(rest)?),
            "delete" | "rm" => Command::Delete(row_number(rest)?),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command: {other} (try `help`)")),
        };
        Ok(Some(command))
    }
}

fn row_number(arg: &str) -> Result<usize, String> {
    arg.parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| format!("expected a row number, got `{arg}`"))
}

async fn print_view<T, N, C>(controller: &TodoController<T, N, C>)
where
    T: Transport,
    N: Notifier,
    C: Confirm,
{
    print!("{}", controller.view().await);
}

/// Run until `quit` or end of input.
pub async fn run<T, N, C>(controller: Arc<TodoController<T, N, C>>, input: Arc<LineReader>) -> Result<()>
where
    T: Transport + 'static,
    N: Notifier + 'static,
    C: Confirm + 'static,
{
    controller.refresh().await;
    print_view(&controller).await;
    println!("type `help` for commands");

    while let Some(line) = input.next_line().await {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        debug!(?command, "dispatching");

        match command {
            Command::List => {
                let controller = Arc::clone(&controller);
                tokio::spawn(async move {
                    controller.refresh().await;
                    print_view(&controller).await;
                });
            }
            Command::Add { title, description } => {
                controller.set_title(title).await;
                controller.set_description(description).await;
                controller.add().await;
                print_view(&controller).await;
            }
            Command::Toggle(n) => {
                let Some(id) = controller.view().await.row_at(n).map(|r| r.id.clone()) else {
                    println!("no row {n}");
                    continue;
                };
                let controller = Arc::clone(&controller);
                tokio::spawn(async move {
                    controller.toggle(&id).await;
                    print_view(&controller).await;
                });
            }
            Command::Delete(n) => {
                let Some(id) = controller.view().await.row_at(n).map(|r| r.id.clone()) else {
                    println!("no row {n}");
                    continue;
                };
                controller.delete(&id).await;
                print_view(&controller).await;
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }
    Ok(())
}
