use std::io::Write;

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::CalcError;

/// A blocking source of user input lines. `Ok(None)` means the user closed
/// the session (CTRL-C / CTRL-D) rather than answering the prompt.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CalcError>;
}

/// Interactive terminal input backed by rustyline.
pub struct Console {
    editor: DefaultEditor,
}

impl Console {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Console {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CalcError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

pub fn validate_number(input: &str) -> Option<f64> {
    match input.trim().parse::<f64>() {
        Ok(num) if num.is_finite() => Some(num),
        _ => None,
    }
}

/// Re-prompts with the same text until a valid number arrives. There is no
/// retry cap; `Ok(None)` only when the input itself ends.
pub fn prompt_number<S: LineSource, W: Write>(
    source: &mut S,
    out: &mut W,
    prompt: &str,
) -> Result<Option<f64>, CalcError> {
    loop {
        let Some(line) = source.read_line(prompt)? else {
            return Ok(None);
        };

        match validate_number(&line) {
            Some(num) => return Ok(Some(num)),
            None => writeln!(out, "Invalid input \"{line}\". Please enter a valid number.")?,
        }
    }
}
