//! Actix Web server exposing the dashboard page, selection API, team photos,
//! and Prometheus metrics.
//!
//! All handler state is read-only: the catalog is `'static` and the page is
//! rendered once before the listener starts.

use std::path::PathBuf;

use actix_web::{App, HttpResponse, HttpServer, http::header, web};
use anyhow::{Context, Result};
use itinerary::{Catalog, CatalogError, ItineraryId, SelectionController};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::dashboard::{
    assets::{self, AssetError, PLACEHOLDER_SVG},
    config::DashboardConfig,
    telemetry,
    view::{self, TripWindow},
};

/// Shared state backing HTTP handlers.
pub(crate) struct ServerState {
    pub(crate) catalog: &'static Catalog,
    pub(crate) page: String,
    pub(crate) assets_dir: PathBuf,
}

impl ServerState {
    pub(crate) fn new(catalog: &'static Catalog, assets_dir: PathBuf) -> Result<Self> {
        catalog.validate().context("itinerary catalog failed validation")?;
        let window = TripWindow::expedition()?;
        let page =
            view::render_page(catalog, &window).context("failed to render dashboard page")?;
        Ok(Self {
            catalog,
            page,
            assets_dir,
        })
    }

    fn controller(&self) -> SelectionController<'static> {
        SelectionController::new(self.catalog)
    }
}

#[derive(Serialize)]
struct ItinerarySummary {
    id: ItineraryId,
    label: String,
    color: &'static str,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Register every dashboard route.
pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_route))
        .route("/api/itineraries", web::get().to(itineraries_handler))
        .route("/api/selection/{id}", web::get().to(selection_handler))
        .route("/assets/team/{file}", web::get().to(team_photo_handler))
        .route("/metrics", web::get().to(metrics_handler));
}

/// Validate startup preconditions, bind the listener, and serve until shutdown.
pub fn run(config: DashboardConfig) -> Result<()> {
    telemetry::init_metrics_recorder()?;
    assets::ensure_assets_dir(&config.assets_dir)?;
    let state = web::Data::new(ServerState::new(
        Catalog::builtin(),
        config.assets_dir.clone(),
    )?);

    actix_web::rt::System::new().block_on(async move {
        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .configure(configure)
        })
        .bind((config.bind, config.port))
        .with_context(|| format!("failed to bind {}:{}", config.bind, config.port))?
        .run();

        info!(
            "{stars} Bike expedition dashboard listening on http://{}:{} {stars}",
            config.bind,
            config.port,
            stars = "*".repeat(24)
        );

        server.await.context("HTTP server error")
    })
}

/// Serve the pre-rendered dashboard.
async fn index_route(state: web::Data<ServerState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(state.page.clone())
}

/// List the catalog in dropdown order.
async fn itineraries_handler(state: web::Data<ServerState>) -> HttpResponse {
    let summaries: Vec<ItinerarySummary> = state
        .catalog
        .iter()
        .map(|itinerary| ItinerarySummary {
            id: itinerary.id,
            label: itinerary.dropdown_label(),
            color: itinerary.color,
        })
        .collect();
    HttpResponse::Ok().json(summaries)
}

/// Recompute every output for the requested itinerary.
async fn selection_handler(
    path: web::Path<String>,
    state: web::Data<ServerState>,
) -> HttpResponse {
    let raw = path.into_inner();
    match state.controller().on_selection_changed(&raw) {
        Ok(update) => {
            debug!(itinerary = %update.itinerary, "selection changed");
            let itinerary = update.itinerary.as_str();
            metrics::counter!(telemetry::SELECTION_TOTAL, "itinerary" => itinerary).increment(1);
            HttpResponse::Ok()
                .insert_header((header::CACHE_CONTROL, "no-cache"))
                .json(update)
        }
        Err(err @ CatalogError::NotFound { .. }) => {
            warn!(selection = %raw, "rejected selection: {err}");
            metrics::counter!(telemetry::SELECTION_REJECTED_TOTAL).increment(1);
            HttpResponse::NotFound().json(ErrorBody {
                error: err.to_string(),
            })
        }
        Err(err) => HttpResponse::InternalServerError().json(ErrorBody {
            error: err.to_string(),
        }),
    }
}

/// Serve a team photo, or a placeholder when the file is missing.
async fn team_photo_handler(
    path: web::Path<String>,
    state: web::Data<ServerState>,
) -> HttpResponse {
    let file = path.into_inner();
    match assets::load_team_photo(&state.assets_dir, &file).await {
        Ok(bytes) => HttpResponse::Ok().content_type("image/png").body(bytes),
        Err(AssetError::Missing { path }) => {
            debug!("team photo {} missing; serving placeholder", path.display());
            metrics::counter!(telemetry::ASSET_PLACEHOLDER_TOTAL).increment(1);
            HttpResponse::Ok()
                .content_type("image/svg+xml")
                .body(PLACEHOLDER_SVG)
        }
        Err(err @ AssetError::InvalidName { .. }) => {
            warn!("{err}");
            HttpResponse::NotFound().finish()
        }
        Err(err) => {
            warn!("{err}");
            HttpResponse::Ok()
                .content_type("image/svg+xml")
                .body(PLACEHOLDER_SVG)
        }
    }
}

/// Render Prometheus metrics in text exposition format.
async fn metrics_handler() -> HttpResponse {
    match telemetry::prometheus_handle() {
        Some(handle) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(handle.render()),
        None => HttpResponse::ServiceUnavailable().body("metrics recorder not installed"),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use actix_web::{
        http::StatusCode,
        test::{self, TestRequest},
    };
    use serde_json::Value;

    use super::*;

    fn state(assets_dir: &Path) -> web::Data<ServerState> {
        web::Data::new(ServerState::new(Catalog::builtin(), assets_dir.to_path_buf()).unwrap())
    }

    macro_rules! service {
        ($assets:expr) => {
            test::init_service(App::new().app_data(state($assets)).configure(configure)).await
        };
    }

    #[actix_web::test]
    async fn index_serves_rendered_page() {
        let dir = tempfile::tempdir().unwrap();
        let app = service!(dir.path());
        let resp = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("<title>Bike Expedition</title>"));
        assert!(html.contains(r#"id="itinerary-dropdown""#));
    }

    #[actix_web::test]
    async fn selection_returns_all_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let app = service!(dir.path());
        let req = TestRequest::get().uri("/api/selection/it_1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["itinerary"], "it_1");
        assert_eq!(body["color"], "red");
        assert_eq!(body["kpis"]["total_distance_km"]["value"], 435);
        assert_eq!(body["kpis"]["day_count"]["value"], 5);
        assert_eq!(body["chart"]["data"][0]["type"], "bar");
        assert_eq!(
            body["chart"]["data"][0]["y"],
            serde_json::json!([85, 100, 85, 90, 75])
        );
        let map = &body["map"]["data"][0];
        assert_eq!(map["type"], "scattermapbox");
        assert_eq!(map["lat"].as_array().unwrap().len(), 6);
        assert_eq!(map["text"][0], "Paris");
        assert_eq!(map["text"][5], "Bruxelles");
    }

    #[actix_web::test]
    async fn repeated_selection_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let app = service!(dir.path());
        let first = test::call_and_read_body(
            &app,
            TestRequest::get().uri("/api/selection/it_2").to_request(),
        )
        .await;
        let second = test::call_and_read_body(
            &app,
            TestRequest::get().uri("/api/selection/it_2").to_request(),
        )
        .await;
        assert_eq!(first, second);
    }

    #[actix_web::test]
    async fn unknown_selection_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = service!(dir.path());
        let resp = test::call_service(
            &app,
            TestRequest::get().uri("/api/selection/it_7").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], r#"unknown itinerary "it_7""#);

        // the service keeps answering afterwards
        let resp = test::call_service(
            &app,
            TestRequest::get().uri("/api/selection/it_3").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn itineraries_are_listed_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let app = service!(dir.path());
        let req = TestRequest::get().uri("/api/itineraries").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["it_1", "it_2", "it_3"]);
        assert_eq!(body[2]["color"], "yellow");
    }

    #[actix_web::test]
    async fn existing_photo_is_served_as_png() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("team")).unwrap();
        std::fs::write(dir.path().join("team").join("gabriel.png"), b"\x89PNG").unwrap();
        let app = service!(dir.path());
        let resp = test::call_service(
            &app,
            TestRequest::get().uri("/assets/team/gabriel.png").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );
        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), b"\x89PNG");
    }

    #[actix_web::test]
    async fn missing_photo_degrades_to_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let app = service!(dir.path());
        let resp = test::call_service(
            &app,
            TestRequest::get().uri("/assets/team/jordan.png").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );
        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), PLACEHOLDER_SVG.as_bytes());
    }

    #[actix_web::test]
    async fn invalid_photo_name_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = service!(dir.path());
        let resp = test::call_service(
            &app,
            TestRequest::get().uri("/assets/team/..%2Fsecret.png").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
