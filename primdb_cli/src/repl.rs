use anyhow::Result;
use primdb_core::engine::Output;
use primdb_core::parser::parser::parse;
use primdb_core::Database;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::error;

use crate::formatter::{format_output, HELP};

const PROMPT: &str = "primdb> ";

pub struct Repl {
    db: Database,
    editor: DefaultEditor,
    /// Skip the confirmation prompt for drop_table and delete.
    assume_yes: bool,
}

impl Repl {
    pub fn new(db: Database, assume_yes: bool) -> Result<Self> {
        Ok(Self {
            db,
            editor: DefaultEditor::new()?,
            assume_yes,
        })
    }

    /// Reads and executes lines until `exit`, Ctrl-C or Ctrl-D.
    pub fn run(&mut self) -> Result<()> {
        println!("primdb {} (type 'help' or 'exit')", env!("CARGO_PKG_VERSION"));

        loop {
            let line = match self.editor.readline(PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => {
                    error!("Readline error: {e}");
                    break;
                }
            };

            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            let _ = self.editor.add_history_entry(input);

            if !self.handle_line(input)? {
                break;
            }
        }

        println!("Bye.");
        Ok(())
    }

    /// Returns `false` when the session should end.
    fn handle_line(&mut self, input: &str) -> Result<bool> {
        let cmd = match parse(input) {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("Error: {e}");
                return Ok(true);
            }
        };

        if cmd.is_destructive() && !self.assume_yes && !self.confirm(cmd.name())? {
            println!("Operation cancelled.");
            return Ok(true);
        }

        match self.db.execute_command(cmd) {
            Ok(Output::Exit) => return Ok(false),
            Ok(Output::Help) => println!("{HELP}"),
            Ok(out) => println!("{}", format_output(&out)),
            Err(e) => println!("Error: {e}"),
        }
        Ok(true)
    }

    fn confirm(&mut self, action: &str) -> Result<bool> {
        let prompt = format!("Are you sure you want to run \"{action}\"? [y/n]: ");
        match self.editor.readline(&prompt) {
            Ok(answer) => Ok(answer.trim().eq_ignore_ascii_case("y")),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
