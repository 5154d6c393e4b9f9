//! Fixed user-facing strings, one catalog per supported locale.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Locales with a message catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Th,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Th => f.write_str("th"),
        }
    }
}

/// Validation failures a field can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issue {
    NameRequired,
    EmailRequired,
    InvalidEmail,
    MovieRequired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    pub locale: Locale,
    name_required: &'static str,
    email_required: &'static str,
    invalid_email: &'static str,
    movie_required: &'static str,
    comment_placeholder: &'static str,
    empty_placeholder: &'static str,
}

static ENGLISH: MessageCatalog = MessageCatalog {
    locale: Locale::En,
    name_required: "name required",
    email_required: "email required",
    invalid_email: "invalid email format",
    movie_required: "movie selection required",
    comment_placeholder: "No comment provided",
    empty_placeholder: "Not provided",
};

static THAI: MessageCatalog = MessageCatalog {
    locale: Locale::Th,
    name_required: "โปรดใส่ชื่อของคุณ",
    email_required: "โปรดใส่อีเมลของคุณ",
    invalid_email: "รูปแบบอีเมลไม่ถูกต้อง",
    movie_required: "กรุณาเลือกหนังที่คุณชอบ",
    comment_placeholder: "No comment provided",
    empty_placeholder: "Not provided",
};

impl MessageCatalog {
    pub fn for_locale(locale: Locale) -> &'static MessageCatalog {
        match locale {
            Locale::En => &ENGLISH,
            Locale::Th => &THAI,
        }
    }

    pub fn english() -> &'static MessageCatalog {
        &ENGLISH
    }

    pub fn message(&self, issue: Issue) -> &'static str {
        match issue {
            Issue::NameRequired => self.name_required,
            Issue::EmailRequired => self.email_required,
            Issue::InvalidEmail => self.invalid_email,
            Issue::MovieRequired => self.movie_required,
        }
    }

    /// Text shown on the summary in place of an empty field.
    pub fn placeholder(&self, field: super::FieldKey) -> &'static str {
        match field {
            super::FieldKey::Comment => self.comment_placeholder,
            _ => self.empty_placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldKey;

    #[test]
    fn locales_deserialize_from_lowercase_codes() {
        let locale: Locale = serde_json::from_str("\"th\"").unwrap();
        assert_eq!(locale, Locale::Th);
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn english_catalog_uses_fixed_strings() {
        let catalog = MessageCatalog::english();
        assert_eq!(catalog.message(Issue::InvalidEmail), "invalid email format");
        assert_eq!(catalog.placeholder(FieldKey::Comment), "No comment provided");
    }

    #[test]
    fn thai_catalog_differs_from_english() {
        let thai = MessageCatalog::for_locale(Locale::Th);
        assert_eq!(thai.locale, Locale::Th);
        assert_ne!(
            thai.message(Issue::NameRequired),
            MessageCatalog::english().message(Issue::NameRequired)
        );
    }
}
