use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{ShellCommand, ShellLine};
use crate::commands;
use crate::session::Session;

const PROMPT: &str = "cbcluster> ";

/// What the loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Read commands until `exit`, `quit` or end of input. Each command runs to
/// completion before the next prompt is shown.
pub async fn run(mut session: Session) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush().context("Failed to write prompt")?;

        line.clear();
        let read = input.read_line(&mut line).context("Failed to read command")?;
        if read == 0 {
            println!();
            return Ok(());
        }

        if handle_line(&mut session, &line).await == Step::Exit {
            return Ok(());
        }
    }
}

async fn handle_line(session: &mut Session, line: &str) -> Step {
    let words = match split_words(line) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("error: {}", e);
            return Step::Continue;
        }
    };
    if words.is_empty() {
        return Step::Continue;
    }

    tracing::debug!(command = %words[0], "shell command");

    let parsed = match ShellLine::try_parse_from(&words) {
        Ok(parsed) => parsed,
        Err(e) => {
            // help output lands here too
            let _ = e.print();
            return Step::Continue;
        }
    };

    match parsed.command {
        ShellCommand::Exit { .. } => Step::Exit,
        ShellCommand::Cluster(command) => {
            for out in commands::execute(session, &command).await {
                out.print();
            }
            Step::Continue
        }
    }
}

/// Split a shell line into words, honouring single and double quotes so
/// passwords and paths may contain spaces.
fn split_words(line: &str) -> Result<Vec<String>, &'static str> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("unterminated quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
