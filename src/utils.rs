// src/utils.rs
use crate::error::{ErrorContext, Result};
use crate::types::NameScanError;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads lines from a file into a vector of strings.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    reader.lines().collect()
}

/// Remove duplicate usernames, keeping the first occurrence
pub fn deduplicate_usernames(usernames: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for username in usernames {
        if seen.insert(username.clone()) {
            unique.push(username);
        }
    }

    unique
}

/// Positional usernames followed by those from `input_file`, trimmed,
/// without blanks or duplicates.
pub fn collect_usernames(positional: &[String], input_file: Option<&Path>) -> Result<Vec<String>> {
    let mut usernames: Vec<String> = positional.to_vec();

    if let Some(path) = input_file {
        let lines = read_lines(path).with_context(|| format!("cannot read {}", path.display()))?;
        usernames.extend(lines);
    }

    let usernames: Vec<String> = usernames
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    if usernames.is_empty() {
        return Err(NameScanError::InputError(
            "you must specify either a username or an input file".to_string(),
        ));
    }

    Ok(deduplicate_usernames(usernames))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_deduplicate_usernames() {
        let usernames = vec![
            "bob".to_string(),
            "alice".to_string(),
            "bob".to_string(),
            "Bob".to_string(),
        ];

        let unique = deduplicate_usernames(usernames);
        assert_eq!(unique, vec!["bob", "alice", "Bob"]);
    }

    #[test]
    fn test_collect_from_args_and_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "carol").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  alice  ").unwrap();
        writeln!(file, "dave").unwrap();

        let positional = vec!["alice".to_string(), "bob".to_string()];
        let usernames = collect_usernames(&positional, Some(file.path())).unwrap();
        assert_eq!(usernames, vec!["alice", "bob", "carol", "dave"]);
    }

    #[test]
    fn test_no_usernames_is_input_error() {
        let err = collect_usernames(&[], None).unwrap_err();
        assert!(matches!(err, NameScanError::InputError(_)));
        assert!(err.to_string().contains("you must specify"));
    }

    #[test]
    fn test_unreadable_file_is_input_error() {
        let positional = vec!["alice".to_string()];
        let err = collect_usernames(&positional, Some(Path::new("/nonexistent/names.txt")))
            .unwrap_err();
        assert!(matches!(err, NameScanError::InputError(_)));
    }
}
