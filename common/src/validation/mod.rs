//! Validation rule set for the add-image form.
//!
//! Rules are plain functions in a table keyed by [`Field`]; nothing here
//! touches the rendering layer or performs I/O. The form calls
//! [`RuleSet::validate_field`] as the user edits a field and the submission
//! pipeline calls [`RuleSet::validate`] over the whole form before persisting.

mod rules;

use std::fmt;

use thiserror::Error;

use crate::config::ValidationLimits;
use crate::model::pending_upload::{PendingUpload, SelectedFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Image,
    Title,
    Description,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Image, Field::Title, Field::Description];

    /// Field name as registered in the form.
    pub fn name(self) -> &'static str {
        match self {
            Field::Image => "image",
            Field::Title => "title",
            Field::Description => "description",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Image => "Image",
            Field::Title => "Title",
            Field::Description => "Description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Required,
    TooLarge { max_bytes: u64 },
    UnsupportedFormat,
    TooShort { min: usize },
    TooLong { max: usize },
}

/// A failed rule, with the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub violation: Violation,
    pub message: String,
}

/// Outcome of validating one field: `Ok` or the first rule it broke.
pub type ValidationResult = Result<(), FieldError>;

/// Borrowed view of the values under validation.
#[derive(Debug, Clone, Copy)]
pub struct FormInput<'a> {
    pub files: &'a [SelectedFile],
    pub title: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a PendingUpload> for FormInput<'a> {
    fn from(pending: &'a PendingUpload) -> Self {
        Self {
            files: pending.selected_file.as_slice(),
            title: &pending.title,
            description: &pending.description,
        }
    }
}

/// Per-field results of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Inline message for `field`, if it failed.
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.error_for(field).map(|e| e.message.as_str())
    }

    /// Records a fresh result for a single field, replacing the previous one.
    pub fn record(&mut self, field: Field, result: ValidationResult) {
        self.errors.retain(|e| e.field != field);
        if let Err(err) = result {
            self.errors.push(err);
            self.errors.sort_by_key(|e| e.field);
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Errors that must stop a submission before the asset guard runs.
    ///
    /// A missing image has no asset by definition and is left to the
    /// pipeline's missing-asset guard.
    pub fn blocking_errors(&self) -> Vec<FieldError> {
        self.errors
            .iter()
            .filter(|e| !(e.field == Field::Image && e.violation == Violation::Required))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    limits: ValidationLimits,
}

impl RuleSet {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    pub fn validate_field(&self, field: Field, input: &FormInput<'_>) -> ValidationResult {
        let Some(rule) = rules::RULES
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rule)| *rule)
        else {
            return Ok(());
        };

        rule(&self.limits, input).map_err(|violation| FieldError {
            field,
            message: rules::message(field, &violation, &self.limits),
            violation,
        })
    }

    pub fn validate(&self, input: &FormInput<'_>) -> ValidationReport {
        let mut report = ValidationReport::default();
        for (field, _) in rules::RULES {
            report.record(field, self.validate_field(field, input));
        }
        report
    }

    pub fn validate_upload(&self, pending: &PendingUpload) -> ValidationReport {
        self.validate(&FormInput::from(pending))
    }

    pub fn validate_image(&self, files: &[SelectedFile]) -> ValidationResult {
        self.validate_field(Field::Image, &FormInput { files, title: "", description: "" })
    }

    pub fn validate_title(&self, title: &str) -> ValidationResult {
        self.validate_field(Field::Title, &FormInput { files: &[], title, description: "" })
    }

    pub fn validate_description(&self, description: &str) -> ValidationResult {
        self.validate_field(
            Field::Description,
            &FormInput { files: &[], title: "", description },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIB;

    fn file(mime: &str, size: u64) -> SelectedFile {
        SelectedFile {
            name: "upload".to_string(),
            mime_type: mime.to_string(),
            size,
        }
    }

    fn violation(result: ValidationResult) -> Violation {
        result.unwrap_err().violation
    }

    #[test]
    fn image_is_required() {
        let err = RuleSet::default().validate_image(&[]).unwrap_err();
        assert_eq!(err.violation, Violation::Required);
        assert_eq!(err.message, "Image required");
    }

    #[test]
    fn image_size_boundary_is_exclusive() {
        let rules = RuleSet::default();

        assert!(rules.validate_image(&[file("image/png", 10 * MIB - 1)]).is_ok());

        let err = rules.validate_image(&[file("image/png", 10 * MIB)]).unwrap_err();
        assert_eq!(err.message, "The image must be at most 10 MiB");

        assert!(rules.validate_image(&[file("image/png", 64 * MIB)]).is_err());
    }

    #[test]
    fn image_formats() {
        let rules = RuleSet::default();
        for mime in ["image/jpeg", "image/jpg", "image/png", "image/gif", "IMAGE/PNG"] {
            assert!(rules.validate_image(&[file(mime, 1024)]).is_ok(), "{mime}");
        }

        for mime in ["image/webp", "image/svg+xml", "application/pdf", "text/plain", ""] {
            let err = rules.validate_image(&[file(mime, 1024)]).unwrap_err();
            assert_eq!(err.violation, Violation::UnsupportedFormat, "{mime}");
            assert_eq!(err.message, "The format must be JPG, PNG, or GIF");
        }
    }

    #[test]
    fn only_first_file_is_inspected() {
        let rules = RuleSet::default();
        let files = [file("image/gif", 1024), file("application/pdf", 64 * MIB)];
        assert!(rules.validate_image(&files).is_ok());

        let files = [file("application/pdf", 1024), file("image/gif", 1024)];
        assert_eq!(violation(rules.validate_image(&files)), Violation::UnsupportedFormat);
    }

    #[test]
    fn title_length_bounds() {
        let rules = RuleSet::default();
        for len in 2..=20 {
            assert!(rules.validate_title(&"a".repeat(len)).is_ok(), "len {len}");
        }

        let short = rules.validate_title("a").unwrap_err();
        assert_eq!(short.violation, Violation::TooShort { min: 2 });
        assert_eq!(short.message, "Title must have at least 2 characters");

        let long = rules.validate_title(&"a".repeat(21)).unwrap_err();
        assert_eq!(long.violation, Violation::TooLong { max: 20 });
        assert_eq!(long.message, "Title must have at most 20 characters");

        let missing = rules.validate_title("").unwrap_err();
        assert_eq!(missing.message, "Title required");
        assert_ne!(missing.message, short.message);
        assert_ne!(short.message, long.message);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let rules = RuleSet::default();
        assert!(rules.validate_title(&"é".repeat(20)).is_ok());
        assert!(rules.validate_description(&"ã".repeat(65)).is_ok());
    }

    #[test]
    fn whitespace_only_counts_as_absent() {
        let rules = RuleSet::default();
        assert_eq!(violation(rules.validate_title("   ")), Violation::Required);
        assert_eq!(violation(rules.validate_description("\n\t")), Violation::Required);
    }

    #[test]
    fn padding_does_not_satisfy_length_bounds() {
        let rules = RuleSet::default();
        assert_eq!(violation(rules.validate_title(" a")), Violation::TooShort { min: 2 });
        assert!(rules.validate_title(&format!("  {}  ", "a".repeat(20))).is_ok());
        assert!(rules.validate_description(&format!(" {} ", "d".repeat(65))).is_ok());
    }

    #[test]
    fn description_length_bound() {
        let rules = RuleSet::default();
        for len in [1, 30, 65] {
            assert!(rules.validate_description(&"d".repeat(len)).is_ok(), "len {len}");
        }

        let err = rules.validate_description(&"d".repeat(66)).unwrap_err();
        assert_eq!(err.violation, Violation::TooLong { max: 65 });
        assert_eq!(err.message, "Description must have at most 65 characters");

        assert_eq!(
            rules.validate_description("").unwrap_err().message,
            "Description required"
        );
    }

    #[test]
    fn report_collects_every_failing_field() {
        let input = FormInput {
            files: &[file("image/png", 1024)],
            title: "x",
            description: "",
        };
        let report = RuleSet::default().validate(&input);

        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 2);
        assert!(report.message_for(Field::Image).is_none());
        assert_eq!(
            report.message_for(Field::Title),
            Some("Title must have at least 2 characters")
        );
        assert_eq!(report.message_for(Field::Description), Some("Description required"));
    }

    #[test]
    fn recording_a_field_replaces_its_previous_result() {
        let rules = RuleSet::default();
        let mut report = ValidationReport::default();

        report.record(Field::Title, rules.validate_title("x"));
        assert!(report.message_for(Field::Title).is_some());

        report.record(Field::Title, rules.validate_title("Cat"));
        assert!(report.is_valid());
    }

    #[test]
    fn missing_image_is_not_blocking() {
        let input = FormInput {
            files: &[],
            title: "Cat",
            description: "A cat",
        };
        let report = RuleSet::default().validate(&input);

        assert_eq!(report.message_for(Field::Image), Some("Image required"));
        assert!(report.blocking_errors().is_empty());
    }

    #[test]
    fn limits_come_from_configuration() {
        let rules = RuleSet::new(ValidationLimits {
            title_max_chars: 5,
            max_image_bytes: MIB,
            ..ValidationLimits::default()
        });

        assert!(rules.validate_title("sixsix").is_err());
        let err = rules.validate_image(&[file("image/png", MIB)]).unwrap_err();
        assert_eq!(err.message, "The image must be at most 1 MiB");
    }
}
