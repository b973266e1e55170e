//! Interactive shell over one in-memory list store.
//!
//! # Responsibility
//! - Read commands line by line from stdin and apply them to a `ListKeeper`.
//! - Render store messages and sequences for the terminal.
//!
//! # Invariants
//! - Store and parse failures are printed, never fatal.
//! - State lives only for the lifetime of the process.

mod command;

use command::{parse_line, Command, HELP_TEXT};
use listkeeper_core::{
    core_version, default_log_level, init_logging, ListKeeper, Number, StoreResult,
};
use log::{info, warn};
use std::io::{self, BufRead, Write};

const LOG_DIR_NAME: &str = "listkeeper-logs";
const PROMPT: &str = "> ";

/// Result envelope rendered by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ActionResponse {
    ok: bool,
    message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }

    fn from_store<T>(result: StoreResult<T>, render: impl FnOnce(T) -> String) -> Self {
        match result {
            Ok(value) => Self::success(render(value)),
            Err(err) => Self::failure(err.message()),
        }
    }

    fn render(&self) -> String {
        if self.ok {
            self.message.clone()
        } else {
            format!("error: {}", self.message)
        }
    }
}

enum Flow {
    Continue(ActionResponse),
    Quit,
}

fn main() {
    let log_dir = std::env::temp_dir().join(LOG_DIR_NAME);
    match log_dir.to_str() {
        Some(dir) => {
            if let Err(err) = init_logging(default_log_level(), dir) {
                eprintln!("logging disabled: {err}");
            }
        }
        None => eprintln!("logging disabled: log directory is not valid UTF-8"),
    }

    let mut keeper = ListKeeper::new();
    info!("event=shell_start module=cli status=ok");

    if let Err(err) = run(&mut keeper, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("shell stopped: {err}");
    }
    info!("event=shell_stop module=cli status=ok");
}

fn run(
    keeper: &mut ListKeeper,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    writeln!(output, "listkeeper {} (type `help`)", core_version())?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        // Undecodable bytes fail this line only.
        let response = match std::str::from_utf8(&buf) {
            Err(_) => {
                warn!("event=shell_input module=cli status=error reason=invalid_utf8");
                Some(ActionResponse::failure("input is not valid UTF-8"))
            }
            Ok(line) => match parse_line(line) {
                Ok(None) => None,
                Ok(Some(command)) => match execute(keeper, command) {
                    Flow::Continue(response) => Some(response),
                    Flow::Quit => return Ok(()),
                },
                Err(err) => Some(ActionResponse::failure(err.to_string())),
            },
        };

        if let Some(response) = response {
            writeln!(output, "{}", response.render())?;
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

fn execute(keeper: &mut ListKeeper, command: Command) -> Flow {
    let response = match command {
        Command::Show => ActionResponse::success(keeper.list_names().join(", ")),
        Command::Get(name) => ActionResponse::from_store(keeper.get(&name), format_values),
        Command::Add { name, values } => {
            ActionResponse::from_store(keeper.add(&name, values), str::to_string)
        }
        Command::Delete(name) => ActionResponse::from_store(keeper.delete(&name), str::to_string),
        Command::Sort(name) => ActionResponse::from_store(keeper.sort(&name), format_values),
        Command::Append { name, value } => {
            ActionResponse::from_store(keeper.append(&name, value), str::to_string)
        }
        Command::Dump => match serde_json::to_string_pretty(&keeper.snapshot()) {
            Ok(json) => ActionResponse::success(json),
            Err(err) => ActionResponse::failure(format!("dump failed: {err}")),
        },
        Command::Version => ActionResponse::success(core_version()),
        Command::Help => ActionResponse::success(HELP_TEXT),
        Command::Quit => return Flow::Quit,
    };
    Flow::Continue(response)
}

fn format_values(values: &[Number]) -> String {
    let items: Vec<String> = values.iter().map(|value| value.to_string()).collect();
    format!("[{}]", items.join(", "))
}
