use amity::AmityError;
use amity::relationships::{Association, Bounds, Person};
use colored::*;
use serde_json::json;

pub struct CliColors;

impl CliColors {
    pub fn success() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }

    pub fn accent() -> Color {
        Color::TrueColor {
            r: 168,
            g: 85,
            b: 247,
        }
    }
}

/// Output an AmityError, as structured JSON when requested
pub fn output_error_json(error: &AmityError, output_format: &str) {
    if output_format == "json" {
        let (code, details) = match error {
            AmityError::InvalidBounds {
                minimum, maximum, ..
            } => (
                "INVALID_BOUNDS",
                Some(json!({ "minimum": minimum, "maximum": maximum })),
            ),
            AmityError::DuplicateIdentity(id) => ("DUPLICATE_IDENTITY", Some(json!({ "id": id }))),
            AmityError::InvariantViolation(_) => ("INVARIANT_VIOLATION", None),
            AmityError::UnknownIdentity(name) => (
                "UNKNOWN_IDENTITY",
                Some(json!({
                    "name": name,
                    "hint": "Names are 1-16 characters of letters, digits and underscores"
                })),
            ),
            AmityError::ValueOutOfBounds {
                value,
                minimum,
                maximum,
            } => (
                "VALUE_OUT_OF_BOUNDS",
                Some(json!({ "value": value, "minimum": minimum, "maximum": maximum })),
            ),
            AmityError::InvalidValue(_) => ("INVALID_VALUE", None),
            AmityError::PersonNotFound(id) => ("PERSON_NOT_FOUND", Some(json!({ "id": id }))),
            AmityError::Configuration(_) => ("CONFIGURATION_ERROR", None),
            AmityError::Logging(_) => ("LOGGING_ERROR", None),
            AmityError::Storage(_) => ("STORAGE_ERROR", None),
        };

        let mut error_response = json!({
            "error": true,
            "code": code,
            "message": error.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        if let Some(details) = details {
            error_response["details"] = details;
        }

        eprintln!(
            "{}",
            serde_json::to_string_pretty(&error_response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        eprintln!("{}", format_error(&error.to_string()));
    }
}

pub fn format_success(msg: &str) -> String {
    format!(
        "{} {}",
        "✓".color(CliColors::success()).bold(),
        msg.color(CliColors::success())
    )
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_warning(msg: &str) -> String {
    format!(
        "{} {}",
        "⚠".color(CliColors::warning()).bold(),
        msg.color(CliColors::warning())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

pub fn format_association(association: Association) -> ColoredString {
    match association {
        Association::Ally => "Ally".color(CliColors::success()).bold(),
        Association::Neutral => "Neutral".color(CliColors::muted()),
        Association::Enemy => "Enemy".color(CliColors::error()).bold(),
    }
}

/// Value colored by the side of zero it falls on
pub fn format_value(value: f64) -> ColoredString {
    let text = format!("{:+.3}", value);
    if value > 0.0 {
        text.color(CliColors::success())
    } else if value < 0.0 {
        text.color(CliColors::error())
    } else {
        text.color(CliColors::muted())
    }
}

pub fn format_rescale(multiplier: Option<f64>) -> Option<String> {
    multiplier.map(|m| {
        format_warning(&format!(
            "Value exceeded the bounds; every value was scaled by {:.4}",
            m
        ))
    })
}

pub fn print_person(person: &Person) {
    println!(
        "{}",
        "━━━ Player ━━━".color(CliColors::accent()).bold()
    );
    println!(
        "{}: {}",
        "Name".color(CliColors::muted()),
        person.name.bold()
    );
    println!(
        "{}: {}",
        "ID".color(CliColors::muted()),
        person.id().to_string().color(CliColors::accent())
    );
    println!(
        "{}: {}",
        "Value".color(CliColors::muted()),
        format_value(person.value())
    );
    println!(
        "{}: {}",
        "Association".color(CliColors::muted()),
        format_association(person.association())
    );
    if person.derived_association() != person.association() {
        println!(
            "{}",
            format_info(&format!(
                "Value alone suggests {}",
                person.derived_association()
            ))
        );
    }
}

pub fn print_person_list(persons: &[Person]) {
    if persons.is_empty() {
        println!("{}", format_info("No players found."));
        return;
    }

    println!(
        "{:<18} {:>9}  {:<8}  {}",
        "NAME".color(CliColors::muted()).bold(),
        "VALUE".color(CliColors::muted()).bold(),
        "STANDING".color(CliColors::muted()).bold(),
        "ID".color(CliColors::muted()).bold()
    );
    for person in persons {
        println!(
            "{:<18} {:>9}  {:<8}  {}",
            person.name,
            format_value(person.value()),
            format_association(person.association()),
            person.id().to_string().color(CliColors::muted())
        );
    }
    println!(
        "{}",
        format!("{} player(s)", persons.len()).color(CliColors::muted())
    );
}

pub fn print_bounds(bounds: &Bounds) {
    println!(
        "{}: [{}, {}]",
        "Bounds".color(CliColors::muted()),
        format_value(bounds.minimum()),
        format_value(bounds.maximum())
    );
}

/// Pretty JSON for `value`, `{}` if it cannot be serialized
pub fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
