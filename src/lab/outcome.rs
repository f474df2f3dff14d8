use super::record::Payload;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub const CONNECTION_ERROR: &str = "Error de conexión con el servidor";
pub const INVALID_INPUT: &str = "Datos inválidos. Por favor verifica los valores ingresados.";
const UNKNOWN_FAILURE: &str = "Error desconocido en el cálculo";

/// Why a submission did not produce a result.
///
/// Degenerate cases are a separate variant, not a flag on `Rejected`: they
/// render differently but are still failures for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service answered with `exito: false`.
    #[error("{0}")]
    Rejected(String),
    /// The service answered with `exito: false, infinito: true`.
    #[error("{0}")]
    Degenerate(String),
    /// No usable answer: network failure or an undecodable body.
    #[error("Error de conexión con el servidor")]
    Unreachable,
    /// An input did not parse as a number; nothing was sent.
    #[error("Datos inválidos. Por favor verifica los valores ingresados.")]
    InvalidInput { field: &'static str },
}

/// What a result container displays.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Payload),
    Failure(String),
    Warning(String),
}

impl From<ServiceError> for Outcome {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Degenerate(msg) => Outcome::Warning(msg),
            other => Outcome::Failure(other.to_string()),
        }
    }
}

impl From<Result<Payload, ServiceError>> for Outcome {
    fn from(result: Result<Payload, ServiceError>) -> Self {
        match result {
            Ok(payload) => Outcome::Success(payload),
            Err(err) => err.into(),
        }
    }
}

/// Response envelope shared by every endpoint.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(alias = "success")]
    exito: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    infinito: bool,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// Split a decoded response body into a payload or the matching error.
pub fn classify(body: Value) -> Result<Payload, ServiceError> {
    let envelope: Envelope = serde_json::from_value(body).map_err(|err| {
        tracing::warn!(%err, "service response does not match the envelope");
        ServiceError::Unreachable
    })?;
    if envelope.exito {
        return Ok(Payload::new(envelope.fields));
    }
    let message = envelope.error.unwrap_or_else(|| UNKNOWN_FAILURE.to_string());
    if envelope.infinito {
        Err(ServiceError::Degenerate(message))
    } else {
        Err(ServiceError::Rejected(message))
    }
}
