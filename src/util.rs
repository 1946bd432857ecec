use std::io::{BufRead, Write};

/// Answers yes/no questions, the default answer is always no
pub trait Confirm {
    fn confirm(&self, question: &str) -> bool;
}

/// Asks the user on the terminal
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, question: &str) -> bool {
        prompt(question, &mut std::io::stdin().lock(), &mut std::io::stdout())
    }
}

/// Used when confirmation is skipped with `--force`
#[derive(Debug, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _question: &str) -> bool {
        true
    }
}

/// Simple yes/no prompt
pub fn prompt(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> bool {
    let mut s = String::new();

    // if not yes then yes, but if yes then no yes
    let _ = write!(output, "{} [y/N] ", question);
    let _ = output.flush();

    if let Err(err) = input.read_line(&mut s) {
        log::warn!("Could not read answer from stdin: {}", err);
        return false;
    }

    matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
}
