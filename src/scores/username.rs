//! Username validation for the leaderboard.

/// True iff `username` is 3 to 15 characters of ASCII letters, digits or
/// underscore, nothing else.
pub fn validate_username(username: &str) -> bool {
    (3..=15).contains(&username.len())
        && username
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Keep only the valid usernames, in their original order.
pub fn filter_invalid_usernames(usernames: &[String]) -> Vec<String> {
    usernames
        .iter()
        .filter(|username| validate_username(username))
        .cloned()
        .collect()
}
