// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The interactive read loop around the shell core.
//!
//! A thin adapter: read one line, hand it to the parser and executor,
//! print any diagnostic with the `dwsh: ` prefix, repeat. Parse and
//! execution failures abort only the offending line; end of input ends
//! the session.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::Path;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use dwsh_shell::{Executor, Parser};

/// Prompt shown before each read when stdin is a terminal.
const PROMPT: &str = "$ ";

/// Where command lines come from.
pub enum Source {
    /// Interactive terminal with line editing and in-memory history.
    Tty(DefaultEditor),
    /// Plain line reader (a script file or non-tty stdin).
    Lines(Box<dyn BufRead>),
}

impl Source {
    /// Standard input, with line editing when it is a terminal.
    pub fn stdin() -> Self {
        if io::stdin().is_terminal() {
            match DefaultEditor::new() {
                Ok(editor) => return Source::Tty(editor),
                Err(err) => {
                    tracing::debug!(%err, "line editor unavailable, using plain reads");
                }
            }
        }
        Source::Lines(Box::new(BufReader::new(io::stdin())))
    }

    /// Read lines from a script file.
    pub fn file(path: &Path) -> io::Result<Self> {
        Ok(Source::Lines(Box::new(BufReader::new(File::open(path)?))))
    }

    /// Next command line, or `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        match self {
            Source::Tty(editor) => loop {
                match editor.readline(PROMPT) {
                    Ok(line) => {
                        if line.is_empty() {
                            continue;
                        }
                        let _ = editor.add_history_entry(line.as_str());
                        return Some(line);
                    }
                    // ^C drops the pending line and prompts again
                    Err(ReadlineError::Interrupted) => continue,
                    Err(ReadlineError::Eof) => return None,
                    Err(err) => {
                        eprintln!("dwsh: read error: {err}");
                        return None;
                    }
                }
            },
            Source::Lines(reader) => {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) => None,
                    Ok(_) => {
                        strip_newline(&mut line);
                        Some(line)
                    }
                    Err(err) => {
                        eprintln!("dwsh: read error: {err}");
                        None
                    }
                }
            }
        }
    }
}

fn strip_newline(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// One shell session: reads lines until end of input.
pub struct Session {
    source: Source,
    executor: Executor,
}

impl Session {
    pub fn new(source: Source) -> Self {
        Self { source, executor: Executor::new() }
    }

    /// Run until end of input. Reaching EOF is a normal exit (status 0);
    /// the `exit` built-in terminates the process directly.
    pub fn run(&mut self) -> anyhow::Result<()> {
        while let Some(line) = self.source.read_line() {
            self.execute(&line);
        }
        Ok(())
    }

    /// Parse and execute one line, reporting diagnostics on stderr.
    fn execute(&mut self, line: &str) {
        let root = match Parser::parse(line) {
            Ok(Some(root)) => root,
            // blank line: read another
            Ok(None) => return,
            Err(err) => {
                eprintln!("dwsh: parse error: {err}");
                return;
            }
        };

        let mut root = root;
        if let Err(err) = self.executor.run(&mut root) {
            eprintln!("dwsh: {err}");
        }
        let _ = io::stdout().flush();
    }
}

#[cfg(test)]
#[path = "repl_tests.rs"]
mod tests;
