//! Maps backend error codes and messages to Spanish, user-facing text.
//!
//! Lookup order: exact error code, then message templates, then keyword
//! heuristics, then a generic sentence. Nothing in here fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::AppError;

pub const GENERIC_ERROR: &str = "Ocurrió un error. Por favor intenta nuevamente.";
pub const UNEXPECTED_ERROR: &str = "Ocurrió un error inesperado.";

const ERROR_MESSAGES: &[(&str, &str)] = &[
    // Request validation errors
    ("request_validation_failed", "Error de validación en la solicitud"),
    ("invalid_request_format", "Formato de solicitud inválido"),
    // Use case execution errors
    ("use_case_execution_failed", "Error al procesar la solicitud"),
    // Not found errors
    ("not_found", "No se encontró el recurso solicitado"),
    // Match announcement specific errors
    ("team_not_found", "El equipo especificado no existe"),
    ("invalid_start_time_format", "Formato de hora de inicio inválido"),
    ("invalid_end_time_format", "Formato de hora de fin inválido"),
    ("invalid_day_format", "Formato de fecha inválido"),
    ("invalid_category_format", "Formato de categoría inválido"),
    ("invalid_category_range_type", "Tipo de rango de categoría inválido"),
    ("day_cannot_be_in_the_past", "La fecha del partido no puede ser en el pasado"),
    (
        "end_time_cannot_be_before_start_time",
        "La hora de fin no puede ser anterior a la hora de inicio",
    ),
    (
        "location_must_have_country_province_and_locality",
        "La ubicación debe tener país, provincia y localidad",
    ),
    ("team_name_cannot_be_empty", "El nombre del equipo no puede estar vacío"),
    ("sport_cannot_be_empty", "El deporte no puede estar vacío"),
    ("time_slot_cannot_be_empty", "El horario no puede estar vacío"),
    ("invalid_status", "Estado inválido"),
    ("created_at_cannot_be_empty", "La fecha de creación no puede estar vacía"),
];

struct ErrorPattern {
    pattern: Regex,
    template: &'static str,
}

static ERROR_PATTERNS: Lazy<Vec<ErrorPattern>> = Lazy::new(|| {
    [
        (
            r"(?i)team '(.+)' for sport '(.+)' does not exist",
            "El equipo \"$1\" para el deporte \"$2\" no existe",
        ),
        (r"(?i)invalid (.+) format", "Formato de $1 inválido"),
        (r"(?i)(.+) cannot be empty", "$1 no puede estar vacío"),
        (r"(?i)(.+) is required", "$1 es obligatorio"),
        (r"(?i)unable to parse datetime: (.+)", "No se pudo parsear la fecha/hora: $1"),
    ]
    .into_iter()
    .filter_map(|(pattern, template)| match Regex::new(pattern) {
        Ok(pattern) => Some(ErrorPattern { pattern, template }),
        Err(e) => {
            tracing::error!("Invalid error pattern {}: {}", pattern, e);
            None
        }
    })
    .collect()
});

fn lookup_code(code: &str) -> Option<&'static str> {
    let code = code.to_lowercase();
    ERROR_MESSAGES
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, message)| *message)
}

fn apply_patterns(message: &str) -> Option<String> {
    ERROR_PATTERNS.iter().find_map(|entry| {
        let captures = entry.pattern.captures(message)?;
        let mut translated = entry.template.to_string();
        for i in 1..captures.len() {
            let group = captures.get(i).map_or("", |m| m.as_str());
            translated = translated.replacen(&format!("${}", i), group, 1);
        }
        Some(translated)
    })
}

fn keyword_fallback(message: &str) -> Option<&'static str> {
    let lower = message.to_lowercase();

    if lower.contains("team") && lower.contains("does not exist") {
        return Some("El equipo especificado no existe. Verifica el nombre del equipo.");
    }
    if lower.contains("validation failed") {
        return Some("Error de validación. Por favor verifica los datos ingresados.");
    }
    if lower.contains("invalid") && lower.contains("format") {
        return Some("Formato inválido. Por favor verifica los datos ingresados.");
    }
    if lower.contains("cannot be empty") {
        return Some("Hay campos obligatorios sin completar.");
    }
    None
}

/// Translates a backend error into a Spanish sentence.
pub fn translate(code: Option<&str>, message: Option<&str>) -> String {
    if let Some(mapped) = code.filter(|c| !c.is_empty()).and_then(lookup_code) {
        return mapped.to_string();
    }

    if let Some(message) = message.filter(|m| !m.is_empty()) {
        if let Some(translated) = apply_patterns(message) {
            return translated;
        }
        if let Some(generic) = keyword_fallback(message) {
            return generic.to_string();
        }
    }

    GENERIC_ERROR.to_string()
}

/// Translated text for an error raised inside the crate.
pub fn get_error_message(error: &AppError) -> String {
    match error {
        AppError::Api { code, message, .. } => translate(code.as_deref(), Some(message.as_str())),
        other => translate(None, Some(other.to_string().as_str())),
    }
}

fn first_text<'a>(object: &'a serde_json::Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| object.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
}

/// Translated text for a loosely-typed error payload. Anything that is not a
/// string or an object gives [`UNEXPECTED_ERROR`].
pub fn get_error_message_from_value(error: Option<&Value>) -> String {
    match error {
        Some(Value::Object(object)) => {
            let code = first_text(object, &["code", "errorCode"]);
            let message = first_text(object, &["message", "errorMessage", "error"]);
            translate(code, message)
        }
        Some(Value::Array(_)) => translate(None, None),
        Some(Value::String(message)) => translate(None, Some(message.as_str())),
        _ => UNEXPECTED_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_codes_translate_case_insensitively() {
        assert_eq!(
            translate(Some("request_validation_failed"), None),
            "Error de validación en la solicitud"
        );
        assert_eq!(
            translate(Some("NOT_FOUND"), Some("whatever the backend said")),
            "No se encontró el recurso solicitado"
        );
        assert_eq!(translate(Some("invalid_request_format"), None), "Formato de solicitud inválido");
    }

    #[test]
    fn every_table_entry_wins_over_the_message() {
        for (code, expected) in ERROR_MESSAGES {
            let upper = code.to_uppercase();
            assert_eq!(translate(Some(upper.as_str()), Some("team name cannot be empty")), *expected);
        }
    }

    #[test]
    fn team_does_not_exist_pattern_substitutes_groups() {
        let message = "team 'Boca Junior' for sport 'Paddle' does not exist";
        assert_eq!(
            translate(None, Some(message)),
            "El equipo \"Boca Junior\" para el deporte \"Paddle\" no existe"
        );
    }

    #[test]
    fn unknown_code_falls_through_to_patterns() {
        assert_eq!(
            translate(Some("use_case_execution_error"), Some("invalid day format")),
            "Formato de day inválido"
        );
    }

    #[test]
    fn other_patterns() {
        assert_eq!(translate(None, Some("team name cannot be empty")), "team name no puede estar vacío");
        assert_eq!(translate(None, Some("Sport is required")), "Sport es obligatorio");
        assert_eq!(
            translate(None, Some("unable to parse datetime: 25:00")),
            "No se pudo parsear la fecha/hora: 25:00"
        );
    }

    #[test]
    fn keyword_fallbacks() {
        assert_eq!(
            translate(None, Some("validation failed: invalid data")),
            "Error de validación. Por favor verifica los datos ingresados."
        );
        assert_eq!(
            translate(None, Some("invalid format detected")),
            "Formato inválido. Por favor verifica los datos ingresados."
        );
        assert_eq!(
            translate(None, Some("the TEAM you asked for does not exist")),
            "El equipo especificado no existe. Verifica el nombre del equipo."
        );
    }

    #[test]
    fn unknown_errors_get_generic_sentence() {
        assert_eq!(translate(None, Some("some random error")), GENERIC_ERROR);
        assert_eq!(translate(None, None), GENERIC_ERROR);
        assert_eq!(translate(Some(""), Some("")), GENERIC_ERROR);
    }

    #[test]
    fn value_shapes() {
        let with_code = json!({"code": "request_validation_failed", "message": "Invalid data"});
        assert_eq!(
            get_error_message_from_value(Some(&with_code)),
            "Error de validación en la solicitud"
        );

        let with_error_code = json!({"errorCode": "not_found", "errorMessage": "Resource not found"});
        assert_eq!(
            get_error_message_from_value(Some(&with_error_code)),
            "No se encontró el recurso solicitado"
        );

        let with_error_field = json!({"error": "Sport is required"});
        assert_eq!(get_error_message_from_value(Some(&with_error_field)), "Sport es obligatorio");

        let text = json!("validation failed: invalid input");
        assert_eq!(
            get_error_message_from_value(Some(&text)),
            "Error de validación. Por favor verifica los datos ingresados."
        );
    }

    #[test]
    fn unrecognized_shapes_are_unexpected() {
        let null = Value::Null;
        let number = json!(42);
        assert_eq!(get_error_message_from_value(None), UNEXPECTED_ERROR);
        assert_eq!(get_error_message_from_value(Some(&null)), UNEXPECTED_ERROR);
        assert_eq!(get_error_message_from_value(Some(&number)), UNEXPECTED_ERROR);
        assert_ne!(UNEXPECTED_ERROR, GENERIC_ERROR);
    }

    #[test]
    fn app_errors_use_code_then_message() {
        let err = AppError::api(400, Some("invalid_day_format".into()), "invalid day format");
        assert_eq!(get_error_message(&err), "Formato de fecha inválido");

        let err = AppError::api(500, None, "team 'X' for sport 'Tennis' does not exist");
        assert_eq!(get_error_message(&err), "El equipo \"X\" para el deporte \"Tennis\" no existe");

        let err = AppError::Network("HTTP request failed: connection refused".into());
        assert_eq!(get_error_message(&err), GENERIC_ERROR);
    }
}
