use std::io::Write;

use crate::{
    CalcError,
    history::History,
    input::{LineSource, prompt_number},
    ops::MenuChoice,
};

fn show_menu<W: Write>(out: &mut W) -> Result<(), CalcError> {
    writeln!(out)?;
    writeln!(out, "Choose an operation:")?;
    writeln!(out, "1. Add")?;
    writeln!(out, "2. Subtract")?;
    writeln!(out, "3. Multiply")?;
    writeln!(out, "4. Divide")?;
    writeln!(out, "5. Exit")?;
    Ok(())
}

/// The top-level menu loop. Runs until the user picks Exit or closes the
/// input; every completed calculation lands in `history`.
pub fn run<S: LineSource, W: Write>(
    source: &mut S,
    out: &mut W,
    history: &mut History,
) -> Result<(), CalcError> {
    writeln!(out, "Welcome to Calculator!")?;

    loop {
        show_menu(out)?;
        out.flush()?;

        let Some(line) = source.read_line("Enter your choice: ")? else {
            return Ok(());
        };

        let operation = match MenuChoice::from_input(&line) {
            Some(MenuChoice::Operation(operation)) => operation,
            Some(MenuChoice::Exit) => {
                writeln!(out, "Exiting... Goodbye!")?;
                return Ok(());
            }
            None => {
                writeln!(out, "Invalid choice. Please select a number between 1 and 5.")?;
                continue;
            }
        };

        let Some(operand1) = prompt_number(source, out, "Enter first number: ")? else {
            return Ok(());
        };
        let Some(operand2) = prompt_number(source, out, "Enter second number: ")? else {
            return Ok(());
        };

        match operation.apply(operand1, operand2) {
            Ok(result) => {
                writeln!(out, "Result: {result}")?;
                history.record(operation, operand1, operand2, result);
            }
            Err(err) => writeln!(out, "Error: {err}")?,
        }
    }
}
