// src/aggregate.rs
use crate::types::QueryResult;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Results for one username, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameReport {
    pub username: String,
    pub results: Vec<QueryResult>,
}

/// Available first, then taken, then unsuccessful; platform name breaks ties.
pub fn sort_results(results: &mut [QueryResult]) {
    results.sort_by_key(|r| (Reverse((r.valid, r.success)), r.platform.to_lowercase()));
}

/// Orders `results` by the input order of `usernames`, sorting each list.
///
/// Usernames without results still get an (empty) report.
pub fn present(
    usernames: &[String],
    mut results: HashMap<String, Vec<QueryResult>>,
) -> Vec<UsernameReport> {
    usernames
        .iter()
        .map(|username| {
            let mut entries = results.remove(username).unwrap_or_default();
            sort_results(&mut entries);
            UsernameReport {
                username: username.clone(),
                results: entries,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verdict;

    fn result(username: &str, platform: &str, verdict: Verdict) -> QueryResult {
        QueryResult::new(username, platform, verdict)
    }

    #[test]
    fn test_sort_law() {
        let mut results = vec![
            result("alice", "twitter", Verdict::inconclusive("Rate limited")),
            result("alice", "Steam", Verdict::taken("Profile exists")),
            result("alice", "reddit", Verdict::available()),
            result("alice", "GitHub", Verdict::taken("taken")),
            result("alice", "gitlab", Verdict::available()),
            result("alice", "Instagram", Verdict::inconclusive("Unexpected response (HTTP 500)")),
        ];
        sort_results(&mut results);

        let order: Vec<&str> = results.iter().map(|r| r.platform.as_str()).collect();
        assert_eq!(
            order,
            vec!["gitlab", "reddit", "GitHub", "Steam", "Instagram", "twitter"]
        );
    }

    #[test]
    fn test_present_keeps_input_order_and_empty_entries() {
        let usernames = vec!["zed".to_string(), "amy".to_string(), "bob".to_string()];
        let mut results = HashMap::new();
        results.insert(
            "amy".to_string(),
            vec![result("amy", "Reddit", Verdict::available())],
        );
        results.insert("zed".to_string(), Vec::new());

        let reports = present(&usernames, results);
        let names: Vec<&str> = reports.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(names, vec!["zed", "amy", "bob"]);
        assert!(reports[0].results.is_empty());
        assert_eq!(reports[1].results.len(), 1);
        assert!(reports[2].results.is_empty());
    }

    #[test]
    fn test_mixed_outcomes_example() {
        let usernames = vec!["alice".to_string(), "bob".to_string()];
        let mut results = HashMap::new();
        results.insert(
            "alice".to_string(),
            vec![
                result("alice", "GitHub", Verdict::taken("Username taken")),
                result("alice", "Twitter", Verdict::available()),
            ],
        );
        // bob's GitHub query failed and lives in the failure list instead
        results.insert(
            "bob".to_string(),
            vec![result("bob", "Twitter", Verdict::taken("Username taken"))],
        );

        let reports = present(&usernames, results);
        let alice: Vec<&str> = reports[0].results.iter().map(|r| r.platform.as_str()).collect();
        let bob: Vec<&str> = reports[1].results.iter().map(|r| r.platform.as_str()).collect();
        assert_eq!(alice, vec!["Twitter", "GitHub"]);
        assert_eq!(bob, vec!["Twitter"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut results = vec![
            result("alice", "GitHub", Verdict::taken("first")),
            result("alice", "github", Verdict::taken("second")),
        ];
        sort_results(&mut results);
        assert_eq!(results[0].message, "first");
        assert_eq!(results[1].message, "second");
    }
}
