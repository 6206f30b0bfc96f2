#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use saas_setup::console::Console;
use saas_setup::settings::SetupSettings;
use saas_setup::tools::{Tool, ToolOutput, ToolRunner};
use saas_setup::{SetupError, SetupResult};

/// Console driven by a fixed list of answers that records everything printed.
#[derive(Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub lines: Vec<String>,
    pub questions: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn said(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn ask(&mut self, question: &str) -> SetupResult<String> {
        self.questions.push(question.to_string());
        self.answers.pop_front().ok_or_else(|| {
            SetupError::Input(io::Error::new(io::ErrorKind::UnexpectedEof, "no answer"))
        })
    }
}

/// Tool runner answering from a table keyed by `"<program> <args...>"`.
///
/// Unknown commands fail to spawn, like a binary missing from PATH. A key can
/// queue several responses; the last one repeats.
#[derive(Default)]
pub struct FakeRunner {
    responses: RefCell<HashMap<String, VecDeque<ToolOutput>>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(self, command: &str, stdout: &str) -> Self {
        self.push(
            command,
            ToolOutput {
                success: true,
                code: Some(0),
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        )
    }

    pub fn fail(self, command: &str, stderr: &str) -> Self {
        self.push(
            command,
            ToolOutput {
                success: false,
                code: Some(1),
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        )
    }

    fn push(self, command: &str, output: ToolOutput) -> Self {
        self.responses
            .borrow_mut()
            .entry(command.to_string())
            .or_default()
            .push_back(output);
        self
    }

    pub fn called(&self, command: &str) -> bool {
        self.calls.borrow().iter().any(|call| call == command)
    }

    pub fn call_count(&self, command: &str) -> usize {
        self.calls.borrow().iter().filter(|call| *call == command).count()
    }

    /// Stripe installed and logged in.
    pub fn stripe_ready(self) -> Self {
        self.ok("stripe --version", "stripe version 1.21.0")
            .ok("stripe config --list", "test_mode_api_key = 'sk_test_x'")
    }

    pub fn stripe_webhook(self, stdout: &str) -> Self {
        self.ok("stripe listen --print-secret", stdout)
    }

    pub fn turso_ready(self, name: &str, url_output: &str) -> Self {
        self.ok("turso --version", "turso version v0.97.1")
            .ok(&format!("turso db create {name}"), "Created database")
            .ok(&format!("turso db show {name} --url"), url_output)
    }
}

impl ToolRunner for FakeRunner {
    fn run(&self, program: &Path, args: &[&str]) -> io::Result<ToolOutput> {
        let mut key = program.display().to_string();
        for arg in args {
            key.push(' ');
            key.push_str(arg);
        }
        self.calls.borrow_mut().push(key.clone());
        let mut responses = self.responses.borrow_mut();
        let Some(queue) = responses.get_mut(&key) else {
            return Err(io::Error::new(io::ErrorKind::NotFound, "command not found"));
        };
        let output = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        output.ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "command not found"))
    }
}

pub fn settings_in(dir: &Path) -> SetupSettings {
    SetupSettings {
        env_file: dir.join(".env"),
        base_url: "http://localhost:3000".to_string(),
        stripe: Tool::new("Stripe", PathBuf::from("stripe")),
        turso: Tool::new("Turso", PathBuf::from("turso")),
    }
}
