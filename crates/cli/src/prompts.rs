//! Small stdin helpers for the menu loop.

use std::io::{self, Write};

/// Prints `prompt`, flushes, and returns one trimmed line of input.
pub fn line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_owned())
}

/// Reads a 1-based id as displayed in the tables and converts it to a
/// 0-based roster index. `None` when the input is not a usable number.
pub fn index(prompt: &str) -> io::Result<Option<usize>> {
    let text = line(prompt)?;
    Ok(text.parse::<usize>().ok().and_then(|n| n.checked_sub(1)))
}
