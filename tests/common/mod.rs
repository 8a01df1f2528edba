#![allow(dead_code)]

pub mod command;

/// Split command output into lines, keeping empty marker separators
pub fn output_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(ToString::to_string)
        .collect()
}

/// Commit lines only: everything but the `=` marker lines and their separators
pub fn commit_lines(stdout: &[u8]) -> Vec<String> {
    output_lines(stdout)
        .into_iter()
        .filter(|line| !line.is_empty() && !line.starts_with('=') && !line.ends_with('='))
        .collect()
}
