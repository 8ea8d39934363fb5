use axum::{Router, routing::get};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use hockeyhero_app::{app::AppBus, resource::Resource};
use hockeyhero_types::{
    errors::ApplicationError,
    models::{HeroDetails, HeroKeys},
};

use crate::handlers::{
    create_resource, delete_resource, get_resource, list_resources, partial_update_resource,
    update_resource,
};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>) -> AppState {
        AppState { app_bus }
    }

    /// Prefix for the alert headers, from config.
    pub fn app_name(&self) -> &str {
        &self.app_bus.config().app_name
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .merge(resource_routes::<HeroDetails>())
            .merge(resource_routes::<HeroKeys>())
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;

        tracing::info!("HTTP Server started, listening on http://{}", addr);
        Self::serve_with_listener(state, listener).await
    }

    /// Serves on an already bound listener, e.g. an ephemeral port in tests.
    pub async fn serve_with_listener(
        state: AppState,
        listener: TcpListener,
    ) -> Result<(), ApplicationError> {
        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

/// The six CRUD routes of one resource under `/api/<path>`.
fn resource_routes<R: Resource>() -> Router<AppState> {
    let collection = format!("/api/{}", R::PATH);
    let item = format!("/api/{}/{{id}}", R::PATH);

    Router::new()
        .route(
            &collection,
            get(list_resources::<R>).post(create_resource::<R>),
        )
        .route(
            &item,
            get(get_resource::<R>)
                .put(update_resource::<R>)
                .patch(partial_update_resource::<R>)
                .delete(delete_resource::<R>),
        )
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
