use std::io::{self, BufRead, Write};

use anyhow::bail;
use clap::{Parser, Subcommand};
use student_records::client::{HttpStudentApi, Outcome, StudentController};
use student_records::config::{init_tracing, ClientConfig};
use student_records::view::{render_table, SortDirection};

#[derive(Parser)]
#[command(name = "student-cli", about = "Manage student records over the REST API")]
struct Cli {
    #[command(flatten)]
    client: ClientConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show records, optionally filtered by name.
    List {
        #[arg(long, default_value = "")]
        search: String,
        /// Sort Z → A instead of A → Z.
        #[arg(long)]
        desc: bool,
    },
    /// Add a record.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: String,
        #[arg(long)]
        class: String,
    },
    /// Change some fields of a record.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<String>,
        #[arg(long)]
        class: Option<String>,
    },
    /// Delete a record.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut controller = StudentController::new(HttpStudentApi::new(cli.client.api_base));

    let outcome = match cli.command {
        Command::List { search, desc } => {
            let outcome = controller.refresh().await;
            controller.set_search_term(search);
            if desc {
                controller.set_sort_direction(SortDirection::Descending);
            }
            if outcome == Outcome::Completed {
                print!("{}", render_table(&controller.visible_records()));
                println!();
            }
            outcome
        }
        Command::Add { name, age, class } => {
            controller.set_name(name);
            controller.set_age(age);
            controller.set_class(class);
            let outcome = controller.submit().await;
            if let Some(created) = controller.records().last() {
                println!("created {}", created.id);
            }
            outcome
        }
        Command::Update {
            id,
            name,
            age,
            class,
        } => {
            let outcome = controller.refresh().await;
            if outcome != Outcome::Completed {
                outcome
            } else {
                let Some(existing) = controller.records().iter().find(|r| r.id == id).cloned()
                else {
                    bail!("no student with id {}", id);
                };
                controller.begin_edit(&existing);
                if let Some(name) = name {
                    controller.set_name(name);
                }
                if let Some(age) = age {
                    controller.set_age(age);
                }
                if let Some(class) = class {
                    controller.set_class(class);
                }
                controller.submit().await
            }
        }
        Command::Delete { id, yes } => {
            let outcome = controller.remove(&id, || yes || confirm(&id)).await;
            if outcome == Outcome::Completed {
                println!("deleted {}", id);
            }
            outcome
        }
    };

    match outcome {
        Outcome::Completed => Ok(()),
        Outcome::Skipped => {
            eprintln!("nothing to do");
            Ok(())
        }
        Outcome::Failed => bail!(controller
            .last_error()
            .unwrap_or("request failed")
            .to_string()),
    }
}

/// Ask on stdin before deleting.
fn confirm(id: &str) -> bool {
    print!("Bạn có chắc muốn xóa học sinh này? ({}) [y/N] ", id);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}
