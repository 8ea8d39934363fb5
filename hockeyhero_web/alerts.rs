//! `X-<app>-alert` / `X-<app>-error` / `X-<app>-params` headers telling clients
//! what happened to which record.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

pub fn entity_creation_alert(app_name: &str, entity_name: &str, param: &str) -> HeaderMap {
    alert(app_name, &format!("{app_name}.{entity_name}.created"), param)
}

pub fn entity_update_alert(app_name: &str, entity_name: &str, param: &str) -> HeaderMap {
    alert(app_name, &format!("{app_name}.{entity_name}.updated"), param)
}

pub fn entity_deletion_alert(app_name: &str, entity_name: &str, param: &str) -> HeaderMap {
    alert(app_name, &format!("{app_name}.{entity_name}.deleted"), param)
}

pub fn failure_alert(app_name: &str, entity_name: &str, error_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(
        &mut headers,
        format!("X-{app_name}-error"),
        &format!("error.{error_key}"),
    );
    insert(&mut headers, format!("X-{app_name}-params"), entity_name);
    headers
}

fn alert(app_name: &str, message: &str, param: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(&mut headers, format!("X-{app_name}-alert"), message);
    insert(&mut headers, format!("X-{app_name}-params"), param);
    headers
}

fn insert(headers: &mut HeaderMap, name: String, value: &str) {
    match (
        HeaderName::try_from(name.as_str()),
        HeaderValue::from_str(value),
    ) {
        (Ok(name), Ok(value)) => {
            headers.insert(name, value);
        }
        _ => tracing::warn!("Skipping invalid alert header {name}: {value}"),
    }
}
