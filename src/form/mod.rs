//! Form data model, validation rules and message catalogs.

pub mod messages;
pub mod record;
pub mod validation;

pub use messages::{Issue, Locale, MessageCatalog};
pub use record::{AcceptedRecord, FieldKey, SubmissionRecord};
pub use validation::{accept, is_valid_email, validate, ValidationErrors};
