//! Lookup service for single-record evaluations

use callscore_core::types::EvaluationLookup;
use gloo_net::http::Request;
use serde_json::Value;

/// Message shown when the backend reports no record for the given ID
pub const NOT_FOUND_MESSAGE: &str = "Запису нема";

/// Prefix for every other lookup failure
pub const LOOKUP_ERROR_PREFIX: &str = "Помилка отримання оцінки: ";

/// Fetch the evaluation for `record_id` and coerce the payload.
///
/// # Errors
///
/// A 404 reply fails with [`NOT_FOUND_MESSAGE`]; any other failure fails
/// with a message carrying [`LOOKUP_ERROR_PREFIX`] and the underlying
/// error text.
pub async fn get_evaluation(record_id: &str) -> Result<EvaluationLookup, String> {
    let response = Request::get(&format!("/api/evaluation/{record_id}"))
        .send()
        .await
        .map_err(|e| format!("{LOOKUP_ERROR_PREFIX}{e}"))?;

    if !response.ok() {
        return Err(lookup_failure(response.status()));
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| format!("{LOOKUP_ERROR_PREFIX}{e}"))?;

    Ok(EvaluationLookup::from_value(&body))
}

/// Map a non-success lookup status to its user-facing message
fn lookup_failure(status: u16) -> String {
    if status == 404 {
        NOT_FOUND_MESSAGE.to_string()
    } else {
        format!("{LOOKUP_ERROR_PREFIX}HTTP {status}")
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_not_found_maps_to_exact_message() {
        assert_eq!(lookup_failure(404), "Запису нема");
    }

    #[test]
    fn test_other_failures_carry_the_prefix() {
        for status in [400, 500, 502, 504] {
            let message = lookup_failure(status);
            assert!(
                message.starts_with("Помилка отримання оцінки: "),
                "{message} should carry the lookup error prefix"
            );
            assert!(message.contains(&status.to_string()));
        }
    }
}
