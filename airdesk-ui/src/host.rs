use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;
use tracing::{info, warn};
use crate::controller::{Controller, UiEvent};
use crate::document::TerminalDocument;
use crate::error::AppError;

pub const HELP: &str = "\
commands:
  name <text>    set the passenger name
  flight <id>    select a flight
  book           submit the booking form
  toggle         show or hide the chat panel
  type <text>    put text in the chat input
  say <text>     type a chat message and press Enter
  send           click the chat send button
  quit           leave";

/// One line of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetName(String),
    SelectFlight(String),
    Type(String),
    Say(String),
    Event(UiEvent),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "name" => Command::SetName(rest.to_string()),
        "flight" => Command::SelectFlight(rest.to_string()),
        "type" => Command::Type(rest.to_string()),
        // Untrimmed text would still be trimmed by the handler
        "say" => Command::Say(rest.to_string()),
        "book" => Command::Event(UiEvent::SubmitBooking),
        "toggle" => Command::Event(UiEvent::ToggleChat),
        "send" => Command::Event(UiEvent::ClickSend),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Drive the controller from line-based input until `quit` or end of input.
///
/// Requests run on the runtime as they are issued; pending ones are awaited
/// before returning.
pub async fn run<R, W>(
    controller: Controller,
    document: Arc<TerminalDocument<W>>,
    input: R,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send + 'static,
{
    let mut lines = input.lines();
    let mut in_flight = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let event = match parse_command(&line) {
            Some(Command::SetName(name)) => {
                document.set_passenger_name(&name);
                continue;
            }
            Some(Command::SelectFlight(id)) => {
                if let Err(e) = document.select_flight(&id) {
                    document.note(&e.to_string());
                }
                continue;
            }
            Some(Command::Type(text)) => {
                document.set_chat_input(&text);
                continue;
            }
            Some(Command::Say(text)) => {
                document.set_chat_input(&text);
                UiEvent::KeyPress("Enter".to_string())
            }
            Some(Command::Event(event)) => event,
            Some(Command::Help) => {
                document.note(HELP);
                continue;
            }
            Some(Command::Quit) => break,
            None => {
                document.note(&format!("unknown command: {} (try `help`)", line.trim()));
                continue;
            }
        };

        if let Some(request) = controller.dispatch(event) {
            in_flight.spawn(request);
        }
    }

    info!("Input closed, waiting for {} pending requests", in_flight.len());
    while let Some(done) = in_flight.join_next().await {
        if let Err(e) = done {
            warn!("Request task ended abnormally: {}", e);
        }
    }
    Ok(())
}
