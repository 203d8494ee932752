use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};
use std::borrow::Cow;

use biaoda_core::prompt::StylePreference;

use crate::commands::available_commands;

/// Readline helper: Tab-completes slash commands and style names, and
/// highlights command lines so they stand apart from chat input.
pub struct BiaodaHelper;

impl Completer for BiaodaHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Self::Candidate>), ReadlineError> {
        let line = &line[..pos];

        // "/style <partial>" completes style names, by Chinese label or alias
        if let Some(rest) = line.strip_prefix("/style ") {
            let candidates = StylePreference::all()
                .iter()
                .filter(|s| {
                    rest.is_empty()
                        || s.label().starts_with(rest)
                        || s.name().starts_with(&rest.to_lowercase())
                })
                .map(|s| Pair {
                    display: format!("{} ({})", s.label(), s.name()),
                    replacement: s.label().to_string(),
                })
                .collect();
            return Ok((pos - rest.len(), candidates));
        }

        if let Some(rest) = line.strip_prefix('/') {
            if !rest.contains(char::is_whitespace) {
                let candidates = available_commands()
                    .iter()
                    .filter(|cmd| cmd.name.starts_with(rest))
                    .map(|cmd| Pair {
                        display: format!("/{} - {}", cmd.name, cmd.description),
                        replacement: format!("/{}", cmd.name),
                    })
                    .collect();
                return Ok((0, candidates));
            }
        }

        Ok((pos, Vec::new()))
    }
}

impl Hinter for BiaodaHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<Self::Hint> {
        None
    }
}

impl Highlighter for BiaodaHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        // Highlight commands in magenta
        if line.starts_with('/') {
            Cow::Owned(format!("\x1b[35m{line}\x1b[0m"))
        } else {
            Cow::Borrowed(line)
        }
    }

    fn highlight_char(&self, line: &str, _pos: usize, _kind: CmdKind) -> bool {
        line.starts_with('/')
    }
}

impl Validator for BiaodaHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for BiaodaHelper {}
