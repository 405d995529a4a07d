#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Hint,
    Restart,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  1-9      place your mark (1 is top-left, 9 is bottom-right)
  hint     ask the engine for your best move
  restart  start a new game
  help     show this message
  quit     leave";

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim().to_ascii_lowercase();
        let command = match line.as_str() {
            "" => return Ok(None),
            "hint" | "h" => Command::Hint,
            "restart" | "r" => Command::Restart,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => match other.parse::<usize>() {
                Ok(cell @ 1..=9) => Command::Place(cell - 1),
                Ok(_) => return Err("Cell must be between 1 and 9".to_string()),
                Err(_) => return Err(format!("Unknown command: {}", other)),
            },
        };
        Ok(Some(command))
    }
}
