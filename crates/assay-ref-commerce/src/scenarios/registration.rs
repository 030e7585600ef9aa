//! Scenario 3: Registration
//!
//! An HTTP-shaped handler: decode a JSON request body, validate it against
//! limits loaded from TOML, and answer with a status code and a JSON
//! response carrying the error tree. No server is started; the handler is
//! a plain function from body to response.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use assay_contracts::{
    error::{AssayError, AssayResult},
    rule_fn, FieldState, Rule, RuleFailure, ValidationError,
};
use assay_core::{Field, Schema, Validator};
use assay_rules::{max_n, max_s, min_n, min_s, not_zero};

use crate::limits::RegistrationLimits;
use crate::mock_data::{INVALID_REGISTRATION, MALFORMED_REGISTRATION, VALID_REGISTRATION};
use crate::records::RegistrationRequest;
use crate::scenarios::valid_email;

pub const STATUS_CREATED: u16 = 201;
pub const STATUS_BAD_REQUEST: u16 = 400;

/// The JSON response returned for every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub status: u16,
    pub success: bool,
    pub message: String,
    /// Present only when validation failed; serialized in flattened form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationError>,
}

impl RegistrationResponse {
    fn created() -> Self {
        Self {
            status: STATUS_CREATED,
            success: true,
            message: "User registered successfully".to_string(),
            errors: None,
        }
    }

    fn bad_request(message: impl Into<String>, errors: Option<ValidationError>) -> Self {
        Self {
            status: STATUS_BAD_REQUEST,
            success: false,
            message: message.into(),
            errors,
        }
    }
}

// ── Rules ─────────────────────────────────────────────────────────────────────

/// At least `min` characters with an uppercase letter, a lowercase letter,
/// and a digit. Every missing class is named in one message.
pub fn strong_password(min: usize) -> Rule<String> {
    rule_fn(move |state: &FieldState<'_, String>| {
        let password = state.value();
        let mut missing = Vec::new();

        if password.chars().count() < min {
            missing.push(format!("at least {min} characters"));
        }
        if !password.chars().any(char::is_uppercase) {
            missing.push("an uppercase letter".to_string());
        }
        if !password.chars().any(char::is_lowercase) {
            missing.push("a lowercase letter".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            missing.push("a digit".to_string());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RuleFailure::new(format!(
                "password must contain {}",
                missing.join(", ")
            )))
        }
    })
}

// ── Handler ───────────────────────────────────────────────────────────────────

/// Decode a request body. Malformed JSON and missing fields both become
/// `AssayError::InvalidInput`.
pub fn decode_request(body: &str) -> AssayResult<RegistrationRequest> {
    serde_json::from_str(body).map_err(|e| AssayError::InvalidInput {
        reason: format!("registration body: {}", e),
    })
}

/// Build the registration schema for `request` under `limits`.
pub fn registration_schema(request: &RegistrationRequest, limits: &RegistrationLimits) -> Schema {
    let password = request.password.clone();

    Schema::new()
        .field(
            "username",
            Field::new(request.username.clone())
                .rule(not_zero())
                .rule(min_s(limits.username_min))
                .rule(max_s(limits.username_max)),
        )
        .field(
            "email",
            Field::new(request.email.clone()).rule(not_zero()).rule(valid_email()),
        )
        .field(
            "password",
            Field::new(request.password.clone())
                .rule(not_zero())
                .rule(strong_password(limits.password_min)),
        )
        .field(
            "confirmPassword",
            Field::new(request.confirm_password.clone()).check(
                move |state: &FieldState<'_, String>| {
                    if *state.value() == password {
                        Ok(())
                    } else {
                        Err(RuleFailure::new("passwords do not match"))
                    }
                },
            ),
        )
        .field(
            "age",
            Field::new(request.age)
                .rule(min_n(limits.minimum_age))
                .rule(max_n(limits.maximum_age)),
        )
}

/// Handle one registration request body.
pub fn handle_registration(body: &str, limits: &RegistrationLimits) -> RegistrationResponse {
    let request = match decode_request(body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "rejecting undecodable registration body");
            return RegistrationResponse::bad_request("Invalid request body", None);
        }
    };

    match Validator::new(registration_schema(&request, limits)).validate() {
        Ok(()) => {
            info!(username = %request.username, "registration accepted");
            RegistrationResponse::created()
        }
        Err(errors) => {
            warn!(
                username = %request.username,
                failure_count = errors.failure_count(),
                "registration failed validation"
            );
            RegistrationResponse::bad_request("Validation failed", Some(errors))
        }
    }
}

// ── Scenario runner ───────────────────────────────────────────────────────────

/// Handle `body` and print the status line and JSON response.
pub fn run_with_body(body: &str, limits: &RegistrationLimits) -> AssayResult<RegistrationResponse> {
    let response = handle_registration(body, limits);
    let rendered = serde_json::to_string_pretty(&response).map_err(|e| AssayError::Serialization {
        reason: format!("failed to render registration response: {}", e),
    })?;

    println!("  HTTP {}", response.status);
    for line in rendered.lines() {
        println!("    {line}");
    }
    Ok(response)
}

/// Run Scenario 3: Registration with the bundled limits.
pub fn run_scenario() -> AssayResult<()> {
    println!("=== Scenario 3: Registration ===");
    println!();

    let limits = RegistrationLimits::bundled()?;

    for (label, body) in [
        ("valid request", VALID_REGISTRATION),
        ("invalid request", INVALID_REGISTRATION),
        ("malformed request", MALFORMED_REGISTRATION),
    ] {
        println!("  [{label}]");
        run_with_body(body, &limits)?;
        println!();
    }

    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn limits() -> RegistrationLimits {
        RegistrationLimits::default()
    }

    #[test]
    fn test_valid_registration_is_created() {
        let response = handle_registration(VALID_REGISTRATION, &limits());
        assert_eq!(response.status, STATUS_CREATED);
        assert!(response.success);
        assert_eq!(response.message, "User registered successfully");
        assert!(response.errors.is_none());
    }

    /// Every broken field is reported in the response tree.
    #[test]
    fn test_invalid_registration_reports_each_field() {
        let response = handle_registration(INVALID_REGISTRATION, &limits());
        assert_eq!(response.status, STATUS_BAD_REQUEST);
        assert!(!response.success);
        assert_eq!(response.message, "Validation failed");

        let errors = response.errors.expect("validation errors should be attached");
        assert_eq!(
            errors.to_map().map(serde_json::Value::Object),
            Some(json!({
                "username": { "errors": ["length is 2, but needs to be at least 3"] },
                "email": { "errors": ["must be a valid email address"] },
                "password": { "errors": ["password must contain an uppercase letter, a digit"] },
                "confirmPassword": { "errors": ["passwords do not match"] },
                "age": { "errors": ["value is 16, but needs to be at least 18"] },
            }))
        );
    }

    /// The caller sees a fixed message; the decoder's reason stays in the
    /// `InvalidInput` error and the log.
    #[test]
    fn test_malformed_body_is_bad_request() {
        let response = handle_registration(MALFORMED_REGISTRATION, &limits());
        assert_eq!(response.status, STATUS_BAD_REQUEST);
        assert_eq!(response.message, "Invalid request body");
        assert!(response.errors.is_none());

        match decode_request(MALFORMED_REGISTRATION) {
            Err(AssayError::InvalidInput { reason }) => {
                assert!(reason.starts_with("registration body: "), "got: {reason}");
                assert!(
                    !response.message.contains(&reason),
                    "decoder details must not reach the response"
                );
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    /// Tighter limits change the outcome without touching the handler.
    #[test]
    fn test_limits_drive_the_schema() {
        let strict = RegistrationLimits {
            minimum_age: 30,
            ..RegistrationLimits::default()
        };
        let response = handle_registration(VALID_REGISTRATION, &strict);
        let errors = response.errors.unwrap();
        assert_eq!(
            errors.messages_at("age").unwrap(),
            ["value is 25, but needs to be at least 30"]
        );
        assert_eq!(errors.failure_count(), 1);
    }

    #[test]
    fn test_strong_password() {
        let rule = strong_password(8);
        let good = "Password123".to_string();
        let short = "Pa1".to_string();

        assert!(rule(&FieldState::new(&good, "password")).is_ok());
        assert_eq!(
            rule(&FieldState::new(&short, "password")).unwrap_err().message(),
            "password must contain at least 8 characters"
        );
    }

    /// The response survives a JSON round trip with its tree intact.
    #[test]
    fn test_response_json_round_trip() {
        let response = handle_registration(INVALID_REGISTRATION, &limits());
        let rendered = serde_json::to_string(&response).unwrap();
        let decoded: RegistrationResponse = serde_json::from_str(&rendered).unwrap();

        assert_eq!(decoded.status, response.status);
        assert_eq!(
            decoded.errors.as_ref().and_then(ValidationError::to_map),
            response.errors.as_ref().and_then(ValidationError::to_map),
        );

        let created = serde_json::to_value(RegistrationResponse::created()).unwrap();
        assert!(created.get("errors").is_none(), "errors key should be omitted on success");
    }

    #[test]
    fn test_run_scenario() {
        run_scenario().unwrap();
    }
}
