//! Line commands read from stdin and mapped onto controller intents.

use roster_core::FormInput;
use shared::domain::EntryId;

pub const HELP: &str = "\
commands:
  list                          reload the roster
  select <id>                   show one puppy
  add <name> | <breed> [| <team id>]
  remove <id>                   remove a puppy
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Select(EntryId),
    Add(FormInput),
    Remove(EntryId),
    Help,
    Quit,
}

fn parse_id(raw: &str) -> Result<EntryId, String> {
    match raw.trim() {
        "" => Err("expected an id".to_string()),
        id if id.contains(char::is_whitespace) => Err(format!("expected a single id, got '{id}'")),
        id => Ok(EntryId::from(id)),
    }
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match verb.to_ascii_lowercase().as_str() {
        "list" | "ls" => Ok(Command::Refresh),
        "select" | "show" => parse_id(rest).map(Command::Select),
        "remove" | "rm" => parse_id(rest).map(Command::Remove),
        "add" => {
            // Blank fields are passed through; the controller owns validation.
            let mut fields = rest.splitn(3, '|').map(str::trim);
            let name = fields.next().unwrap_or_default();
            let breed = fields.next().unwrap_or_default();
            let team = fields.next().unwrap_or_default();
            Ok(Command::Add(FormInput::new(name, breed).with_team_id(team)))
        }
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err("empty command".to_string()),
        other => Err(format!("unknown command '{other}'; try 'help'")),
    }
}
