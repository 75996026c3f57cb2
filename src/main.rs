use std::{error::Error, io};

use clap::Parser;
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::{history::History, input::Console};

pub mod history;
pub mod input;
pub mod ops;
pub mod session;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("{0}")]
    Readline(ReadlineError),
    #[error("{0}")]
    Io(io::Error),
}

impl From<ReadlineError> for CalcError {
    fn from(value: ReadlineError) -> Self {
        Self::Readline(value)
    }
}

impl From<io::Error> for CalcError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Interactive command-line calculator", long_about = None)]
struct Args {}

fn main() -> Result<(), Box<dyn Error>> {
    let _args = Args::parse();

    let mut console = Console::new()?;
    let mut out = io::stdout();
    let mut history = History::new();

    session::run(&mut console, &mut out, &mut history)?;

    Ok(())
}
