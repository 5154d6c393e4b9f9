use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::messages::{Issue, MessageCatalog};
use super::record::{AcceptedRecord, FieldKey, SubmissionRecord};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Field-keyed validation messages. Empty means the record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<FieldKey, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldKey, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn get(&self, field: FieldKey) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldKey) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.entries.keys().copied()
    }
}

/// Returns true when `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks every rule and collects all failures; never stops at the first.
/// Values are trimmed first, so whitespace-only input counts as empty.
pub fn validate(record: &SubmissionRecord, messages: &MessageCatalog) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if record.name.trim().is_empty() {
        errors.insert(FieldKey::Name, messages.message(Issue::NameRequired));
    }

    let email = record.email.trim();
    if email.is_empty() {
        errors.insert(FieldKey::Email, messages.message(Issue::EmailRequired));
    } else if !is_valid_email(email) {
        errors.insert(FieldKey::Email, messages.message(Issue::InvalidEmail));
    }

    if record.selected_movie.trim().is_empty() {
        errors.insert(
            FieldKey::SelectedMovie,
            messages.message(Issue::MovieRequired),
        );
    }

    errors
}

/// Validates `candidate` and promotes its trimmed values on success.
pub fn accept(
    candidate: &SubmissionRecord,
    messages: &MessageCatalog,
) -> Result<AcceptedRecord, ValidationErrors> {
    let errors = validate(candidate, messages);
    if errors.is_empty() {
        Ok(AcceptedRecord::from_validated(candidate.trimmed()))
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Locale;

    fn english() -> &'static MessageCatalog {
        MessageCatalog::english()
    }

    #[test]
    fn email_pattern_accepts_and_rejects() {
        for ok in ["alice@example.com", "a.b+c@sub.domain.org", "x@y.z"] {
            assert!(is_valid_email(ok), "{ok} should be valid");
        }
        for bad in [
            "alice",
            "alice@",
            "@example.com",
            "alice@example",
            "alice@@example.com",
            "al ice@example.com",
            "alice@exa mple.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn valid_record_has_no_errors() {
        let record = SubmissionRecord::new("Alice", "alice@example.com", "Inception", "");
        assert!(validate(&record, english()).is_empty());
    }

    #[test]
    fn whitespace_only_values_count_as_empty() {
        let record = SubmissionRecord::new("   ", "\t", " ", "");
        let errors = validate(&record, english());
        assert_eq!(errors.get(FieldKey::Name), Some("name required"));
        assert_eq!(errors.get(FieldKey::Email), Some("email required"));
        assert_eq!(
            errors.get(FieldKey::SelectedMovie),
            Some("movie selection required")
        );
    }

    #[test]
    fn malformed_email_reports_format_not_required() {
        let record = SubmissionRecord::new("Alice", "alice.example.com", "Inception", "");
        let errors = validate(&record, english());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldKey::Email), Some("invalid email format"));
    }

    #[test]
    fn all_invalid_reports_exactly_three_fields() {
        let record = SubmissionRecord::new("", "nope", "", "   ");
        let errors = validate(&record, english());
        let keys: Vec<_> = errors.keys().map(FieldKey::as_str).collect();
        assert_eq!(keys, vec!["name", "email", "selectedMovie"]);
        assert!(!errors.contains(FieldKey::Comment));
    }

    #[test]
    fn accept_trims_values() {
        let record = SubmissionRecord::new(" Alice ", " alice@example.com ", "Inception ", " hi ");
        let accepted = accept(&record, english()).expect("record should be accepted");
        assert_eq!(accepted.name(), "Alice");
        assert_eq!(accepted.email(), "alice@example.com");
        assert_eq!(accepted.selected_movie(), "Inception");
        assert_eq!(accepted.comment(), Some("hi"));
    }

    #[test]
    fn messages_follow_the_selected_locale() {
        let thai = MessageCatalog::for_locale(Locale::Th);
        let errors = validate(&SubmissionRecord::default(), thai);
        assert_eq!(errors.get(FieldKey::Name), Some("โปรดใส่ชื่อของคุณ"));
        assert_eq!(errors.get(FieldKey::Email), Some("โปรดใส่อีเมลของคุณ"));
    }
}
