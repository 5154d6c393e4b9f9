use std::fmt;

/// Identifies one input of the form.
///
/// Ordering follows the on-screen field order so error maps iterate top to
/// bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Name,
    Email,
    SelectedMovie,
    Comment,
}

impl FieldKey {
    pub const ALL: [FieldKey; 4] = [
        FieldKey::Name,
        FieldKey::Email,
        FieldKey::SelectedMovie,
        FieldKey::Comment,
    ];

    /// Stable key used in error maps and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Email => "email",
            FieldKey::SelectedMovie => "selectedMovie",
            FieldKey::Comment => "comment",
        }
    }

    /// Human label shown beside the field.
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Name => "Name",
            FieldKey::Email => "Email",
            FieldKey::SelectedMovie => "Movie",
            FieldKey::Comment => "Comment",
        }
    }

    /// Accepts the stable key, the label, or the `movie` shorthand.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "name" => Some(FieldKey::Name),
            "email" => Some(FieldKey::Email),
            "movie" | "selectedmovie" | "selected_movie" => Some(FieldKey::SelectedMovie),
            "comment" => Some(FieldKey::Comment),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values as typed by the user. Nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub selected_movie: String,
    pub comment: String,
}

impl SubmissionRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        selected_movie: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            selected_movie: selected_movie.into(),
            comment: comment.into(),
        }
    }

    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::SelectedMovie => &self.selected_movie,
            FieldKey::Comment => &self.comment,
        }
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        let slot = match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Email => &mut self.email,
            FieldKey::SelectedMovie => &mut self.selected_movie,
            FieldKey::Comment => &mut self.comment,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        FieldKey::ALL.iter().all(|key| self.get(*key).is_empty())
    }

    /// Copy with surrounding whitespace removed from every field.
    pub(crate) fn trimmed(&self) -> Self {
        Self::new(
            self.name.trim(),
            self.email.trim(),
            self.selected_movie.trim(),
            self.comment.trim(),
        )
    }
}

/// A record that passed validation. Only [`super::validation::accept`] builds
/// one, so holding an `AcceptedRecord` proves the entry is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedRecord {
    record: SubmissionRecord,
}

impl AcceptedRecord {
    pub(crate) fn from_validated(record: SubmissionRecord) -> Self {
        Self { record }
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn email(&self) -> &str {
        &self.record.email
    }

    pub fn selected_movie(&self) -> &str {
        &self.record.selected_movie
    }

    /// `None` when the user left the comment blank.
    pub fn comment(&self) -> Option<&str> {
        if self.record.comment.is_empty() {
            None
        } else {
            Some(&self.record.comment)
        }
    }

    pub fn get(&self, key: FieldKey) -> &str {
        self.record.get(key)
    }
}
