//! Terminal prompt.

use std::io::{self, BufRead, Write};

use crate::Error;

pub const PROMPT: &str = "Enter your query: ";

/// Print the prompt and read one line.
///
/// The line is returned as read, trailing newline included. Hitting end of
/// input before any byte arrives is an error.
pub fn read_query<R, W>(mut input: R, mut output: W) -> Result<String, Error>
where
    R: BufRead,
    W: Write,
{
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputRead(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no input before end of stream",
        )));
    }

    Ok(line)
}
