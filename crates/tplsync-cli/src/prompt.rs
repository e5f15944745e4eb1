//! Post-run confirmation prompt

use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Press Enter to exit...";

/// Print [`PROMPT`] to `output` and block until a line (or EOF) arrives on `input`.
pub fn wait_for_confirmation(mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "{PROMPT}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
