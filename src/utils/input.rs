//! Stdin prompt helpers for the interactive session.

use std::io::{self, Write};

/// Read one trimmed line. EOF on stdin becomes `UnexpectedEof` so callers
/// can treat a closed input stream as "quit" instead of looping forever.
fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(input.trim().to_string())
}

/// Numbered selection over a fixed choice list; reprompts until one of the
/// listed numbers is given.
pub fn choose(label: &str, options: &[String]) -> io::Result<String> {
    println!("\n{label}:");
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
    loop {
        let line = read_line("> ")?;
        match line.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(options[n - 1].clone()),
            _ => println!("Please enter a number between 1 and {}", options.len()),
        }
    }
}

/// Bounded integer prompt; an empty line picks `default`.
pub fn read_in_range(label: &str, lo: u32, hi: u32, default: u32) -> io::Result<u32> {
    loop {
        let line = read_line(&format!("\n{label} [{lo}-{hi}, default {default}]: "))?;
        if line.is_empty() {
            return Ok(default);
        }
        match line.parse::<u32>() {
            Ok(n) if (lo..=hi).contains(&n) => return Ok(n),
            _ => println!("Please enter a number between {lo} and {hi}"),
        }
    }
}

/// Yes/no prompt; anything but y/yes (including a closed stdin) is "no".
pub fn confirm(prompt: &str) -> io::Result<bool> {
    match read_line(prompt) {
        Ok(line) => Ok(matches!(line.to_lowercase().as_str(), "y" | "yes")),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e),
    }
}
