use std::io::{self, BufRead, IsTerminal, Write};

use rpassword::prompt_password;

use crate::error::{SetupError, SetupResult};

/// Operator interaction used by every setup step.
pub trait Console {
    /// Print one progress line.
    fn say(&mut self, line: &str);

    /// Ask a question and return the answer without its line terminator.
    fn ask(&mut self, question: &str) -> SetupResult<String>;

    /// Like [`Console::ask`], but the answer is not echoed when possible.
    fn ask_secret(&mut self, question: &str) -> SetupResult<String> {
        self.ask(question)
    }
}

/// Ask a yes/no question. Anything other than an explicit yes is a no.
pub fn ask_yes_no(console: &mut dyn Console, question: &str) -> SetupResult<bool> {
    let answer = console.ask(question)?;
    Ok(parse_yes_no_token(&answer.trim().to_ascii_lowercase()).unwrap_or(false))
}

pub fn parse_yes_no_token(token: &str) -> Option<bool> {
    match token {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Console bound to the process stdin/stdout.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, line: &str) {
        println!("{line}");
    }

    fn ask(&mut self, question: &str) -> SetupResult<String> {
        print!("{question}");
        io::stdout().flush().map_err(SetupError::Input)?;
        read_answer(&mut io::stdin().lock())
    }

    fn ask_secret(&mut self, question: &str) -> SetupResult<String> {
        if !io::stdin().is_terminal() {
            return self.ask(question);
        }
        prompt_password(question).map_err(SetupError::Input)
    }
}

fn read_answer(reader: &mut impl BufRead) -> SetupResult<String> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(SetupError::Input)?;
    if read == 0 {
        return Err(SetupError::Input(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(strip_line_terminator(&line).to_string())
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
