use crate::config::{MIB, ValidationLimits};
use crate::model::pending_upload::SelectedFile;

use super::{Field, FormInput, Violation};

pub(super) type Rule = fn(&ValidationLimits, &FormInput<'_>) -> Result<(), Violation>;

/// Rule table keyed by field, in display order.
pub(super) const RULES: [(Field, Rule); 3] = [
    (Field::Image, image),
    (Field::Title, title),
    (Field::Description, description),
];

fn image(limits: &ValidationLimits, input: &FormInput<'_>) -> Result<(), Violation> {
    // Single-file semantics: anything after the first file is ignored.
    let file: &SelectedFile = input.files.first().ok_or(Violation::Required)?;

    if file.size >= limits.max_image_bytes {
        return Err(Violation::TooLarge {
            max_bytes: limits.max_image_bytes,
        });
    }

    let mime = file.mime_type.trim().to_ascii_lowercase();
    if !limits.accepted_mime_types.iter().any(|t| t.eq_ignore_ascii_case(&mime)) {
        return Err(Violation::UnsupportedFormat);
    }
    Ok(())
}

fn title(limits: &ValidationLimits, input: &FormInput<'_>) -> Result<(), Violation> {
    let len = present_len(input.title)?;
    if len < limits.title_min_chars {
        return Err(Violation::TooShort {
            min: limits.title_min_chars,
        });
    }
    if len > limits.title_max_chars {
        return Err(Violation::TooLong {
            max: limits.title_max_chars,
        });
    }
    Ok(())
}

fn description(limits: &ValidationLimits, input: &FormInput<'_>) -> Result<(), Violation> {
    let len = present_len(input.description)?;
    if len > limits.description_max_chars {
        return Err(Violation::TooLong {
            max: limits.description_max_chars,
        });
    }
    Ok(())
}

/// Length of `value` without surrounding whitespace; an empty result is absent.
fn present_len(value: &str) -> Result<usize, Violation> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Violation::Required);
    }
    Ok(value.chars().count())
}

/// User-facing message for `violation` on `field`.
pub(super) fn message(field: Field, violation: &Violation, limits: &ValidationLimits) -> String {
    match (field, violation) {
        (Field::Image, Violation::Required) => "Image required".to_string(),
        (_, Violation::Required) => format!("{} required", field.label()),
        (_, Violation::TooLarge { max_bytes }) => {
            format!("The image must be at most {}", human_size(*max_bytes))
        }
        (_, Violation::UnsupportedFormat) => format!(
            "The format must be {}",
            format_list(&limits.accepted_mime_types)
        ),
        (_, Violation::TooShort { min }) => {
            format!("{} must have at least {} characters", field.label(), min)
        }
        (_, Violation::TooLong { max }) => {
            format!("{} must have at most {} characters", field.label(), max)
        }
    }
}

fn human_size(bytes: u64) -> String {
    if bytes % MIB == 0 {
        format!("{} MiB", bytes / MIB)
    } else {
        format!("{} bytes", bytes)
    }
}

/// `["image/jpeg", "image/jpg", "image/png", "image/gif"]` -> `"JPG, PNG, or GIF"`.
fn format_list(mime_types: &[String]) -> String {
    let mut names: Vec<String> = Vec::new();
    for mime in mime_types {
        let subtype = mime.rsplit('/').next().unwrap_or(mime).to_ascii_uppercase();
        let name = if subtype == "JPEG" { "JPG".to_string() } else { subtype };
        if !names.contains(&name) {
            names.push(name);
        }
    }

    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [a, b] => format!("{} or {}", a, b),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_list_merges_jpeg_aliases() {
        let types = ValidationLimits::default().accepted_mime_types;
        assert_eq!(format_list(&types), "JPG, PNG, or GIF");
        assert_eq!(format_list(&["image/png".to_string()]), "PNG");
        assert_eq!(
            format_list(&["image/png".to_string(), "image/webp".to_string()]),
            "PNG or WEBP"
        );
    }

    #[test]
    fn surrounding_whitespace_is_not_counted() {
        assert_eq!(present_len("  "), Err(Violation::Required));
        assert_eq!(present_len(" a"), Ok(1));
        assert_eq!(present_len("\tab \n"), Ok(2));
        assert_eq!(present_len("a b"), Ok(3));
    }

    #[test]
    fn sizes_are_rendered_in_mebibytes() {
        assert_eq!(human_size(10 * MIB), "10 MiB");
        assert_eq!(human_size(1500), "1500 bytes");
    }
}
