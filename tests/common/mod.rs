use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
    Router,
};
use rust_decimal::Decimal;
use serde_json::Value;
use tokio::sync::mpsc;
use tower::ServiceExt;

use kirtasiye_api::{
    config::AppConfig,
    events::{self, EventSender},
    handlers::AppServices,
    models::{Category, Product},
    services::{categories::CreateCategoryInput, products::CreateProductInput},
    store::CatalogStore,
    AppState,
};

/// Helper harness for spinning up an application state backed by a fresh
/// in-memory catalog store.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    _event_task: tokio::task::JoinHandle<()>,
}

impl TestApp {
    /// Construct a new test application with an empty catalog.
    pub async fn new() -> Self {
        let cfg = AppConfig::default();

        let store = Arc::new(CatalogStore::new());
        let (event_tx, event_rx) = mpsc::channel(cfg.event_channel_capacity);
        let event_sender = EventSender::new(event_tx);
        let event_task = tokio::spawn(events::process_events(event_rx));

        let services = AppServices::new(store.clone(), event_sender.clone());
        let state = AppState {
            config: cfg,
            event_sender,
            services,
            store,
        };

        let router = Router::new()
            .nest("/api/v1", kirtasiye_api::api_v1_routes())
            .with_state(state.clone());

        Self {
            router,
            state,
            _event_task: event_task,
        }
    }

    /// Issue a request against the in-process router.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json_body) => builder
                .header("content-type", "application/json")
                .body(Body::from(json_body.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router response")
    }

    /// Seed a category directly through the service layer.
    pub async fn seed_category(&self, name: &str, parent_id: Option<uuid::Uuid>) -> Category {
        self.state
            .services
            .categories
            .create(CreateCategoryInput {
                name: name.to_string(),
                parent_id,
                order: None,
            })
            .await
            .expect("seed category")
    }

    /// Seed a product directly through the service layer.
    pub async fn seed_product(&self, name: &str, category: &str, is_showcase: bool) -> Product {
        self.state
            .services
            .products
            .create(CreateProductInput {
                name: name.to_string(),
                price: Decimal::new(1950, 2),
                image: "https://example.com/p.jpg".to_string(),
                description: None,
                category: category.to_string(),
                is_showcase,
                in_stock: true,
            })
            .await
            .expect("seed product")
    }
}
