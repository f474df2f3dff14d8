use reqwest::Client;
use serde_json::Value;

use crate::lab::{classify, CalculationKind, Inputs, Payload, ServiceError};

/// Posts form inputs to the calculation backend.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: Client::new(), base_url: base_url.into() }
    }

    pub fn url_for(&self, kind: CalculationKind) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), kind.endpoint())
    }

    /// Run one calculation.
    ///
    /// The backend answers validation failures with 4xx/5xx and the usual
    /// envelope, so the body is decoded whatever the status is.
    pub async fn compute(
        &self,
        kind: CalculationKind,
        inputs: &Inputs,
    ) -> Result<Payload, ServiceError> {
        let url = self.url_for(kind);
        tracing::debug!(%kind, %url, "posting calculation");
        let response = self.http.post(&url).json(inputs).send().await.map_err(|err| {
            tracing::warn!(%kind, %err, "calculation request failed");
            ServiceError::Unreachable
        })?;
        let status = response.status();
        let body: Value = response.json().await.map_err(|err| {
            tracing::warn!(%kind, %status, %err, "calculation response is not JSON");
            ServiceError::Unreachable
        })?;
        let result = classify(body);
        tracing::info!(%kind, %status, ok = result.is_ok(), "calculation settled");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    async fn half_life(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        match body.get("t_media").and_then(Value::as_f64) {
            Some(t) if t > 0.0 => (
                StatusCode::OK,
                Json(json!({"exito": true, "k": 0.0693, "t_media": t, "formula": "k = ln(2) / t"})),
            ),
            _ => (
                StatusCode::BAD_REQUEST,
                Json(json!({"exito": false, "error": "La vida media debe ser positiva"})),
            ),
        }
    }

    async fn cooling_time() -> (StatusCode, Json<Value>) {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "exito": false,
                "error": "El objeto nunca alcanzará exactamente esa temperatura.",
                "infinito": true
            })),
        )
    }

    async fn broken() -> &'static str {
        "<html>Internal Server Error</html>"
    }

    async fn spawn_server() -> String {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let app = Router::new()
            .route("/api/radiactiva/calcular-k", post(half_life))
            .route("/api/calcular-tiempo", post(cooling_time))
            .route("/api/generar-tabla", post(broken));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_url_joins_base_and_endpoint() {
        let client = ServiceClient::new("http://localhost:5000/");
        assert_eq!(
            client.url_for(CalculationKind::DecayInitialQuantity),
            "http://localhost:5000/api/radiactiva/calcular-n0"
        );
    }

    #[tokio::test]
    async fn test_success_payload() {
        let client = ServiceClient::new(spawn_server().await);
        let inputs: Inputs = [("t_media", 10.0)].into_iter().collect();
        let payload = client
            .compute(CalculationKind::DecayConstantFromHalfLife, &inputs)
            .await
            .expect("success");
        assert_eq!(payload.number("k"), Some(0.0693));
        assert_eq!(payload.number("t_media"), Some(10.0));
    }

    #[tokio::test]
    async fn test_error_status_still_yields_message() {
        let client = ServiceClient::new(spawn_server().await);
        let inputs: Inputs = [("t_media", -1.0)].into_iter().collect();
        let err = client
            .compute(CalculationKind::DecayConstantFromHalfLife, &inputs)
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::Rejected("La vida media debe ser positiva".into()));
    }

    #[tokio::test]
    async fn test_infinite_answer_is_degenerate() {
        let client = ServiceClient::new(spawn_server().await);
        let err = client
            .compute(CalculationKind::CoolingTime, &Inputs::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Degenerate(_)));
    }

    #[tokio::test]
    async fn test_non_json_body_is_unreachable() {
        let client = ServiceClient::new(spawn_server().await);
        let err = client.compute(CalculationKind::CoolingTable, &Inputs::new()).await.unwrap_err();
        assert_eq!(err, ServiceError::Unreachable);
    }

    #[tokio::test]
    async fn test_closed_port_is_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        let client = ServiceClient::new(format!("http://{addr}"));
        let err = client.compute(CalculationKind::DecayQuantity, &Inputs::new()).await.unwrap_err();
        assert_eq!(err, ServiceError::Unreachable);
    }
}
