//! Interactive command loop.
//!
//! Reads commands line by line, dispatches them against an explicitly
//! passed [`AddressBook`], and writes replies. The loop is generic over
//! its reader and writer so tests can drive it with in-memory buffers.

use crate::book::AddressBook;
use crate::commands::{self, parse_input};
use crate::config::Config;
use chrono::Local;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Result of executing one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print back to the user
    Reply(String),
    /// The user asked to leave the loop
    Exit,
}

/// Parse and execute a single input line against the book.
///
/// Command errors are rendered into their user-facing message here; the
/// caller only ever sees reply text or the exit signal.
pub fn execute(line: &str, book: &mut AddressBook, config: &Config) -> Outcome {
    let (command, args) = parse_input(line);
    debug!(command = %command, args = args.len(), "dispatching command");

    let reply = match command.as_str() {
        "close" | "exit" => return Outcome::Exit,
        "hello" => Ok("How can I help you?".to_string()),
        "add" => commands::add_contact(&args, book),
        "change" => commands::change_phone(&args, book),
        "phone" => commands::show_phone(&args, book),
        "all" => commands::show_all(book),
        "add-birthday" => commands::add_birthday(&args, book),
        "show-birthday" => commands::show_birthday(&args, book),
        "birthdays" => commands::birthdays(
            book,
            config.upcoming_window_days,
            Local::now().date_naive(),
        ),
        _ => Ok("Invalid command.".to_string()),
    };

    Outcome::Reply(reply.unwrap_or_else(|e| e.to_string()))
}

/// Run the command loop until `close`, `exit`, or end of input.
pub fn run<R, W>(
    book: &mut AddressBook,
    config: &Config,
    mut reader: R,
    mut writer: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(writer, "Welcome to the assistant bot!")?;

    loop {
        write!(writer, ">>> ")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            // EOF behaves like an explicit exit
            writeln!(writer, "Good bye!")?;
            break;
        }

        match execute(line.trim(), book, config) {
            Outcome::Exit => {
                writeln!(writer, "Good bye!")?;
                break;
            }
            Outcome::Reply(reply) => writeln!(writer, "{}", reply)?,
        }
    }

    Ok(())
}
