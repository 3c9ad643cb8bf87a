//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Avatar letters for an email or name, e.g. `jane.doe@x.com` -> `JD`.
///
/// Usage in templates: `{{ shell.admin_email|initials }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn initials(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(initials_of(&value.to_string()))
}

fn initials_of(value: &str) -> String {
    let local = value.split('@').next().unwrap_or_default();
    let letters: String = local
        .split(|c: char| !c.is_alphanumeric())
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::initials_of;

    #[test]
    fn test_initials() {
        assert_eq!(initials_of("jane.doe@shop.test"), "JD");
        assert_eq!(initials_of("admin@shop.test"), "A");
        assert_eq!(initials_of("Mary Anne Smith"), "MA");
        assert_eq!(initials_of("@"), "?");
    }
}
