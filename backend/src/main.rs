mod config;
mod services;

use crate::config::Settings;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let url = settings.bind_url();

    let client = reqwest::Client::builder()
        .timeout(settings.relay_timeout)
        .build()
        .map_err(io::Error::other)?;

    match (&settings.webhook_url, settings.relay) {
        (None, _) => warn!("PANEN_WEBHOOK_URL is not set; submissions are disabled"),
        (Some(webhook), true) => info!("Relaying submissions to {}", webhook),
        (Some(webhook), false) => info!("Browser submits directly to {}", webhook),
    }

    if settings.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Server running at {}", url);

    let bind = (settings.host.clone(), settings.port);
    let settings = web::Data::new(settings);
    let client = web::Data::new(client);

    HttpServer::new(move || {
        App::new()
            .app_data(settings.clone())
            .app_data(client.clone())
            .service(services::client_config::configure_routes())
            .service(services::requests::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind(bind)?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        for uri in ["/", "/some/client/route"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "uri {uri}");
            let content_type = resp
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            assert!(content_type.starts_with("text/html"), "uri {uri}: {content_type}");
        }
    }
}
