//! JSON handlers shared by every resource. Routes instantiate them per record type.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use hockeyhero_app::{
    command_handlers::{
        CreateResourceCommandHandler, DeleteResourceCommandHandler,
        PartialUpdateResourceCommandHandler, UpdateResourceCommandHandler,
    },
    cqrs::{
        commands::{CreateResource, DeleteResource, PartialUpdateResource, UpdateResource},
        queries::{GetResource, ListResources},
    },
    queries_handlers::{GetResourceHandler, ListResourcesHandler},
    resource::Resource,
};

use crate::{
    alerts::{entity_creation_alert, entity_deletion_alert, entity_update_alert},
    http::AppState,
    problem::error_response,
};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub filter: Option<String>,
}

fn id_param<R: Resource>(record: &R) -> String {
    record.id().map(|id| id.to_string()).unwrap_or_default()
}

pub async fn create_resource<R: Resource>(
    State(state): State<AppState>,
    Json(record): Json<R>,
) -> Response {
    tracing::debug!("REST request to save {} : {:?}", R::ENTITY_NAME, record);

    match state
        .app_bus
        .execute(CreateResource { record }, CreateResourceCommandHandler::<R>::new())
        .await
    {
        Ok(created) => {
            let id = id_param(&created);
            let location = format!("/api/{}/{}", R::PATH, id);
            let alert = entity_creation_alert(state.app_name(), R::ENTITY_NAME, &id);
            (
                StatusCode::CREATED,
                alert,
                [(header::LOCATION, location)],
                Json(created),
            )
                .into_response()
        }
        Err(e) => error_response(state.app_name(), e),
    }
}

pub async fn update_resource<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(record): Json<R>,
) -> Response {
    tracing::debug!(
        "REST request to update {} : {}, {:?}",
        R::ENTITY_NAME,
        id,
        record
    );

    match state
        .app_bus
        .execute(
            UpdateResource { id, record },
            UpdateResourceCommandHandler::<R>::new(),
        )
        .await
    {
        Ok(updated) => {
            let alert = entity_update_alert(state.app_name(), R::ENTITY_NAME, &id_param(&updated));
            (StatusCode::OK, alert, Json(updated)).into_response()
        }
        Err(e) => error_response(state.app_name(), e),
    }
}

/// Accepts both `application/json` and `application/merge-patch+json` bodies.
pub async fn partial_update_resource<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<R::Patch>,
) -> Response {
    tracing::debug!(
        "REST request to partial update {} partially : {}, {:?}",
        R::ENTITY_NAME,
        id,
        patch
    );

    match state
        .app_bus
        .execute(
            PartialUpdateResource::<R> { id, patch },
            PartialUpdateResourceCommandHandler::<R>::new(),
        )
        .await
    {
        Ok(merged) => {
            let alert = entity_update_alert(state.app_name(), R::ENTITY_NAME, &id_param(&merged));
            (StatusCode::OK, alert, Json(merged)).into_response()
        }
        Err(e) => error_response(state.app_name(), e),
    }
}

pub async fn list_resources<R: Resource>(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Response {
    match params.filter.as_deref() {
        Some(filter) => tracing::debug!(
            "REST request to get all {} where {}",
            R::ENTITY_NAME,
            filter
        ),
        None => tracing::debug!("REST request to get all {}", R::ENTITY_NAME),
    }

    match state
        .app_bus
        .query(
            ListResources::<R>::new(params.filter),
            ListResourcesHandler::<R>::new(),
        )
        .await
    {
        Ok(records) => Json(records).into_response(),
        Err(e) => error_response(state.app_name(), e),
    }
}

pub async fn get_resource<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    tracing::debug!("REST request to get {} : {}", R::ENTITY_NAME, id);

    match state
        .app_bus
        .query(GetResource::<R>::new(id), GetResourceHandler::<R>::new())
        .await
    {
        Ok(record) => Json(record).into_response(),
        Err(e) => error_response(state.app_name(), e),
    }
}

pub async fn delete_resource<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    tracing::debug!("REST request to delete {} : {}", R::ENTITY_NAME, id);

    match state
        .app_bus
        .execute(
            DeleteResource::<R>::new(id),
            DeleteResourceCommandHandler::<R>::new(),
        )
        .await
    {
        Ok(()) => {
            let alert = entity_deletion_alert(state.app_name(), R::ENTITY_NAME, &id.to_string());
            (StatusCode::NO_CONTENT, alert).into_response()
        }
        Err(e) => error_response(state.app_name(), e),
    }
}
