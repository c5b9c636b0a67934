//! Terminal prompts.
//!
//! With the `interactive` feature prompts go through `dialoguer`; without it
//! a plain `[y/N]` line is read from stdin.

use std::io::{self, IsTerminal};

use namewright_core::domain::NamingStyle;

use crate::error::{CliError, CliResult};

/// `true` when stdin can answer a prompt.
pub fn can_prompt() -> bool {
    io::stdin().is_terminal()
}

/// Ask a yes/no question.
///
/// Fails with [`CliError::ConfirmationRequired`] when stdin is not a
/// terminal, so a piped run never blocks on a hidden question.
pub fn confirm(question: &str, default: bool) -> CliResult<bool> {
    if !can_prompt() {
        return Err(CliError::ConfirmationRequired);
    }
    ask(question, default)
}

#[cfg(feature = "interactive")]
fn ask(question: &str, default: bool) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(question)
        .default(default)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: io::Error::from(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn ask(question: &str, default: bool) -> CliResult<bool> {
    use std::io::Write;

    let hint = if default { "[Y/n]" } else { "[y/N]" };
    print!("{question} {hint} ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    Ok(parse_answer(&input, default))
}

/// Pick one of the naming styles from a list.
#[cfg(feature = "interactive")]
pub fn select_style(question: &str, default: NamingStyle) -> CliResult<NamingStyle> {
    let labels: Vec<&str> = NamingStyle::ALL.iter().map(|s| s.as_str()).collect();
    let default_index = NamingStyle::ALL
        .iter()
        .position(|s| *s == default)
        .unwrap_or(0);

    let selection = dialoguer::Select::new()
        .with_prompt(question)
        .items(&labels[..])
        .default(default_index)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read selection".into(),
            source: io::Error::from(e),
        })?;

    Ok(NamingStyle::ALL.get(selection).copied().unwrap_or(default))
}

/// Without `dialoguer` the default is kept.
#[cfg(not(feature = "interactive"))]
pub fn select_style(_question: &str, default: NamingStyle) -> CliResult<NamingStyle> {
    Ok(default)
}

#[cfg_attr(feature = "interactive", allow(dead_code))]
fn parse_answer(input: &str, default: bool) -> bool {
    match input.trim().to_ascii_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    }
}
