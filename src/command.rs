//! Command layer: parse one line of input and run it against a [`Table`].
//!
//! # Grammar
//! ```text
//! insert <id> <username> <email>
//! select
//! .exit | .btree | .constants
//! ```
//!
//! Statement failures (bad input, duplicate key, full tree) are reported on
//! the output stream and the session continues. Only fatal errors (I/O,
//! corruption) are returned to the caller.

use std::io::{BufRead, Write};

use log::debug;
use thiserror::Error;

use crate::common::Result;
use crate::table::Table;

const PROMPT: &str = "db > ";

/// A dot-prefixed command handled outside the statement grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
    Btree,
    Constants,
}

/// A statement against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Insert {
        id: i32,
        username: String,
        email: String,
    },
    Select,
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Meta(MetaCommand),
    Statement(Statement),
}

/// Why a line could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrepareError {
    /// Known keyword, but wrong field count or a non-integer id.
    #[error("Syntax error. Could not parse statement.")]
    Syntax,

    #[error("Unrecognized keyword at start of '{0}'.")]
    UnrecognizedKeyword(String),

    #[error("Unrecognized command '{0}'")]
    UnrecognizedCommand(String),
}

/// What the caller should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Parse a single line (without its trailing newline).
pub fn parse(line: &str) -> std::result::Result<Command, PrepareError> {
    if line.starts_with('.') {
        return match line {
            ".exit" => Ok(Command::Meta(MetaCommand::Exit)),
            ".btree" => Ok(Command::Meta(MetaCommand::Btree)),
            ".constants" => Ok(Command::Meta(MetaCommand::Constants)),
            _ => Err(PrepareError::UnrecognizedCommand(line.to_string())),
        };
    }

    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("insert") => {
            let fields: Vec<&str> = parts.collect();
            let [id, username, email] = fields.as_slice() else {
                return Err(PrepareError::Syntax);
            };
            let id = id.parse().map_err(|_| PrepareError::Syntax)?;
            Ok(Command::Statement(Statement::Insert {
                id,
                username: username.to_string(),
                email: email.to_string(),
            }))
        }
        Some("select") => match parts.next() {
            None => Ok(Command::Statement(Statement::Select)),
            Some(_) => Err(PrepareError::Syntax),
        },
        _ => Err(PrepareError::UnrecognizedKeyword(line.to_string())),
    }
}

/// Run a parsed command, writing its output to `out`.
///
/// # Errors
/// Only fatal errors (see [`Error::is_fatal`](crate::Error::is_fatal)) are
/// returned; everything else is printed and the session continues.
pub fn execute<W: Write>(table: &mut Table, command: &Command, out: &mut W) -> Result<Flow> {
    match command {
        Command::Meta(MetaCommand::Exit) => {
            table.flush()?;
            return Ok(Flow::Exit);
        }
        Command::Meta(MetaCommand::Btree) => {
            writeln!(out, "Tree:")?;
            for line in table.dump_tree() {
                writeln!(out, "{}", line?)?;
            }
        }
        Command::Meta(MetaCommand::Constants) => {
            writeln!(out, "Constants:")?;
            for (name, value) in table.report_constants() {
                writeln!(out, "{}: {}", name, value)?;
            }
        }
        Command::Statement(Statement::Insert {
            id,
            username,
            email,
        }) => match table.execute_insert(*id, username, email) {
            Ok(()) => writeln!(out, "Executed.")?,
            Err(e) if !e.is_fatal() => {
                debug!("Insert of id {} rejected: {}", id, e);
                writeln!(out, "{}", e)?;
            }
            Err(e) => return Err(e),
        },
        Command::Statement(Statement::Select) => {
            for row in table.execute_select()? {
                writeln!(out, "{}", row?)?;
            }
            writeln!(out, "Executed.")?;
        }
    }
    Ok(Flow::Continue)
}

/// Prompt, read, and execute lines until `.exit` or end of input.
///
/// Pages are flushed on both exit paths.
pub fn run_repl<R: BufRead, W: Write>(table: &mut Table, mut input: R, out: &mut W) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input, closing session");
            return table.flush();
        }

        let command = match parse(line.trim_end_matches(&['\n', '\r'][..])) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        if execute(table, &command, out)? == Flow::Exit {
            return Ok(());
        }
    }
}
