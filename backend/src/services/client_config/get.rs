use actix_web::{web, HttpResponse, Responder};
use common::error::NOT_CONFIGURED_MESSAGE;
use common::model::config::ClientConfig;
use common::model::error_body::ErrorBody;

use crate::config::Settings;
use crate::services::requests;

pub async fn process(settings: web::Data<Settings>) -> impl Responder {
    match client_config(&settings) {
        Some(config) => HttpResponse::Ok().json(config),
        None => HttpResponse::ServiceUnavailable().json(ErrorBody::new(NOT_CONFIGURED_MESSAGE)),
    }
}

/// Where the browser should submit, or `None` when there is no webhook.
pub fn client_config(settings: &Settings) -> Option<ClientConfig> {
    let webhook_url = settings.webhook_url.as_ref()?;
    let submit_url = if settings.relay {
        requests::API_PATH.to_string()
    } else {
        webhook_url.to_string()
    };
    Some(ClientConfig {
        submit_url,
        relay: settings.relay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client_config::configure_routes;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::time::Duration;

    fn settings(webhook_url: Option<&str>, relay: bool) -> Settings {
        Settings {
            host: "127.0.0.1".to_string(),
            port: 8080,
            webhook_url: webhook_url.map(|url| url.parse().unwrap()),
            relay,
            relay_timeout: Duration::from_secs(5),
            open_browser: false,
        }
    }

    async fn get_config(settings: Settings) -> (StatusCode, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(settings))
                .service(configure_routes()),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/config").to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn direct_mode_publishes_webhook() {
        let (status, body) =
            get_config(settings(Some("https://hooks.example.com/webhook/video"), false)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "submitUrl": "https://hooks.example.com/webhook/video",
                "relay": false
            })
        );
    }

    #[actix_web::test]
    async fn relay_mode_publishes_relay_path() {
        let (status, body) =
            get_config(settings(Some("https://hooks.example.com/webhook/video"), true)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["submitUrl"], "/api/requests");
        assert_eq!(body["relay"], true);
    }

    #[actix_web::test]
    async fn missing_webhook_is_unavailable() {
        let (status, body) = get_config(settings(None, false)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["message"], NOT_CONFIGURED_MESSAGE);
    }
}
