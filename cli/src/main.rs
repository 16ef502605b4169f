use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use todo_cli::{parse_line, render, session, Args, CliError, UreqTransport};
use todo_core::{TodoClient, TodoListController, Transport};
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!("Commands:");
    println!("  list                      show the list");
    println!("  refresh                   reload from the server");
    println!("  title|desc <text>         fill the open form");
    println!("  due [YYYY-MM-DD]          set or clear the due date");
    println!("  priority [high|medium|low] set or clear the priority");
    println!("  add [title] [--desc D] [--due DATE] [--priority P]");
    println!("  toggle <id> | delete <id> | edit <id>");
    println!("  save | cancel             finish the open edit");
    println!("  sort none|due|priority    change the display order");
    println!("  help | quit");
}

fn show<T: Transport>(controller: &TodoListController<T>) {
    print!("{}", render::render(controller, Local::now().date_naive()));
}

fn run_interactive<T: Transport>(controller: &mut TodoListController<T>) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();
    let mut input = String::new();

    show(controller);
    loop {
        print!("todo> ");
        io::stdout().flush()?;

        input.clear();
        if stdin_lock.read_line(&mut input)? == 0 {
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }
        if line == "help" || line == "?" {
            print_help();
            continue;
        }

        let result = parse_line(line).and_then(|command| session::apply(controller, command));
        if let Err(err) = result {
            eprintln!("ERROR: {err}");
        }
        show(controller);
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    tracing::info!(base_url = %args.base_url, "starting");

    let mut controller = TodoListController::new(TodoClient::new(&args.base_url), UreqTransport::new());
    // A failed initial load is logged; the session starts with an empty list.
    let _ = controller.refresh();

    match run_interactive(&mut controller) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
