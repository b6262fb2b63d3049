//! Interactive session

use crate::console::StdConsole;
use crate::error::Result;
use reel_engine::{Command, Console, Engine};
use std::io::{BufRead, Write};

pub const WELCOME: [&str; 2] = [
    "Hello and welcome to Reel, what would you like to do?",
    "Enter HELP for list of available commands or EXIT to terminate.",
];

pub const GOODBYE: &str = "Reel has now terminated its execution. Thank you and goodbye!";

/// Whether the session should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Parse and execute a single line
///
/// Parse errors and command failures are reported, never returned.
pub fn run_line(engine: &mut Engine, line: &str, console: &mut dyn Console) -> Flow {
    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(err) => {
            tracing::debug!("Rejected input {:?}: {:?}", line, err);
            console.report(&err.to_string());
            return Flow::Continue;
        }
    };

    if command == Command::Exit {
        return Flow::Exit;
    }

    // The failure line has already been reported
    let _ = engine.execute(&command, console);
    Flow::Continue
}

/// Read commands until `EXIT` or end of input
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut Engine,
    console: &mut StdConsole<R, W>,
    prompt: &str,
) -> Result<()> {
    WELCOME.iter().for_each(|line| console.report(line));

    loop {
        console.prompt(prompt)?;
        let Some(line) = console.read_line()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        if run_line(engine, &line, console) == Flow::Exit {
            break;
        }
    }

    console.report(GOODBYE);
    Ok(())
}
