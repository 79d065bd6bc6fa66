use actix_multipart::Multipart;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use common::model::request::{VideoRequest, FIELD_DESCRIPTION, FIELD_PRODUCT, FIELD_VIDEO_COUNT};
use futures_util::StreamExt;
use log::{info, warn};
use reqwest::multipart::Form;
use reqwest::Url;

use super::error::RelayError;
use crate::config::Settings;

/// Upper bound on the size of a single text field. Far above any real link or
/// description.
const MAX_FIELD_BYTES: usize = 64 * 1024;

/// HTTP handler: decode, validate, forward, mirror.
pub async fn process(
    payload: Multipart,
    settings: web::Data<Settings>,
    client: web::Data<reqwest::Client>,
) -> Result<HttpResponse, RelayError> {
    if !settings.relay {
        return Err(RelayError::Disabled);
    }
    let webhook_url = settings
        .webhook_url
        .clone()
        .ok_or(RelayError::NotConfigured)?;

    let request = read_request(payload).await?;
    forward(&client, webhook_url, &request).await
}

/// Collects the three text fields of the multipart body and validates them.
/// Unknown fields are drained and ignored.
async fn read_request(mut payload: Multipart) -> Result<VideoRequest, RelayError> {
    let mut product_image_link: Option<String> = None;
    let mut description: Option<String> = None;
    let mut video_count: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        let (field_name, target) = match name.as_deref() {
            Some(FIELD_PRODUCT) => (FIELD_PRODUCT, &mut product_image_link),
            Some(FIELD_DESCRIPTION) => (FIELD_DESCRIPTION, &mut description),
            Some(FIELD_VIDEO_COUNT) => (FIELD_VIDEO_COUNT, &mut video_count),
            _ => {
                while let Some(chunk) = field.next().await {
                    chunk?;
                }
                continue;
            }
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if bytes.len() + chunk.len() > MAX_FIELD_BYTES {
                warn!("Rejecting relayed request: field {} is too large", field_name);
                return Err(RelayError::FieldTooLarge(field_name));
            }
            bytes.extend_from_slice(&chunk);
        }
        *target = Some(String::from_utf8(bytes).map_err(|_| RelayError::NotUtf8(field_name))?);
    }

    Ok(VideoRequest::from_fields(
        product_image_link,
        description,
        video_count,
    )?)
}

/// Sends the request to the webhook and mirrors its status, content type and
/// body.
async fn forward(
    client: &reqwest::Client,
    webhook_url: Url,
    request: &VideoRequest,
) -> Result<HttpResponse, RelayError> {
    let form = request
        .fields()
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value));

    info!(
        "Relaying request for {} ({} videos)",
        request.product_image_link, request.video_count
    );

    let upstream = client.post(webhook_url).multipart(form).send().await?;

    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = upstream.bytes().await?;

    if !status.is_success() {
        warn!("Webhook answered {} for relayed request", status);
    }

    let mut response = HttpResponse::build(status);
    if let Some(content_type) = content_type {
        response.content_type(content_type);
    }
    Ok(response.body(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::requests::configure_routes;
    use actix_web::{test, App};
    use common::error::{INCOMPLETE_INPUT_MESSAGE, INVALID_INPUT_MESSAGE};
    use std::time::Duration;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BOUNDARY: &str = "panen-test-boundary";

    fn multipart_body(fields: &[(&str, &str)]) -> String {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        body
    }

    fn settings(webhook_url: Option<String>, relay: bool) -> Settings {
        Settings {
            host: "127.0.0.1".to_string(),
            port: 8080,
            webhook_url: webhook_url.map(|url| url.parse().unwrap()),
            relay,
            relay_timeout: Duration::from_secs(5),
            open_browser: false,
        }
    }

    async fn post(settings: Settings, fields: &[(&str, &str)]) -> (StatusCode, web::Bytes) {
        post_with_client(settings, reqwest::Client::new(), fields).await
    }

    async fn post_with_client(
        settings: Settings,
        client: reqwest::Client,
        fields: &[(&str, &str)],
    ) -> (StatusCode, web::Bytes) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(settings))
                .app_data(web::Data::new(client))
                .service(configure_routes()),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/requests")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(multipart_body(fields))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body(resp).await)
    }

    fn message(body: &[u8]) -> String {
        let value: serde_json::Value = serde_json::from_slice(body).unwrap();
        value["message"].as_str().unwrap_or_default().to_string()
    }

    async fn webhook_expecting_no_calls() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        server
    }

    #[actix_web::test]
    async fn incomplete_input_is_rejected_locally() {
        let server = webhook_expecting_no_calls().await;
        let (status, body) = post(
            settings(Some(server.uri()), true),
            &[("Produk", ""), ("description", "d"), ("videoCount", "5")],
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message(&body), INCOMPLETE_INPUT_MESSAGE);
    }

    #[actix_web::test]
    async fn missing_field_is_incomplete() {
        let server = webhook_expecting_no_calls().await;
        let (status, body) = post(
            settings(Some(server.uri()), true),
            &[("Produk", "https://x/y.jpg"), ("videoCount", "5")],
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message(&body), INCOMPLETE_INPUT_MESSAGE);
    }

    #[actix_web::test]
    async fn out_of_range_count_is_rejected_locally() {
        let server = webhook_expecting_no_calls().await;
        let (status, body) = post(
            settings(Some(server.uri()), true),
            &[("Produk", "https://x/y.jpg"), ("description", "d"), ("videoCount", "25")],
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message(&body), INVALID_INPUT_MESSAGE);
    }

    #[actix_web::test]
    async fn valid_request_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook/video"))
            .and(body_string_contains("name=\"Produk\""))
            .and(body_string_contains("https://x/y.jpg"))
            .and(body_string_contains("name=\"videoCount\""))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let (status, _) = post(
            settings(Some(format!("{}/webhook/video", server.uri())), true),
            &[
                ("Produk", "https://x/y.jpg"),
                ("description", "d"),
                ("videoCount", "5"),
                ("extra", "ignored"),
            ],
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn upstream_failure_is_mirrored() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(serde_json::json!({ "message": "boom" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = post(
            settings(Some(server.uri()), true),
            &[("Produk", "https://x/y.jpg"), ("description", "d"), ("videoCount", "5")],
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message(&body), "boom");
    }

    #[actix_web::test]
    async fn unreachable_webhook_is_bad_gateway() {
        let (status, body) = post(
            settings(Some("http://127.0.0.1:1/webhook".to_string()), true),
            &[("Produk", "https://x/y.jpg"), ("description", "d"), ("videoCount", "5")],
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(message(&body).starts_with("Gagal menghubungi webhook"));
    }

    #[actix_web::test]
    async fn disabled_relay_is_not_found() {
        let server = webhook_expecting_no_calls().await;
        let (status, _) = post(
            settings(Some(server.uri()), false),
            &[("Produk", "https://x/y.jpg"), ("description", "d"), ("videoCount", "5")],
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn oversized_field_is_rejected() {
        let server = webhook_expecting_no_calls().await;
        let description = "x".repeat(70 * 1024);
        let (status, body) = post(
            settings(Some(server.uri()), true),
            &[
                ("Produk", "https://x/y.jpg"),
                ("description", &description),
                ("videoCount", "5"),
            ],
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message(&body).contains("description"));
    }

    #[actix_web::test]
    async fn slow_webhook_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();

        let (status, body) = post_with_client(
            settings(Some(server.uri()), true),
            client,
            &[("Produk", "https://x/y.jpg"), ("description", "d"), ("videoCount", "5")],
        )
        .await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert!(message(&body).starts_with("Webhook tidak merespons"));
    }
}
