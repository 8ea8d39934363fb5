use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use hockeyhero_types::errors::{AppError, ApplicationError, DbError};

use crate::alerts::failure_alert;

/// Problem-style JSON body returned for failed requests.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    pub title: String,
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
}

impl ProblemDetails {
    fn http(status: StatusCode, title: &str) -> Self {
        Self {
            title: title.to_string(),
            status: status.as_u16(),
            message: format!("error.http.{}", status.as_u16()),
            entity_name: None,
            error_key: None,
            params: None,
        }
    }
}

/// Maps an application error to its HTTP response.
pub fn error_response(app_name: &str, err: ApplicationError) -> Response {
    match err {
        ApplicationError::App(AppError::Validation {
            message,
            entity_name,
            error_key,
        }) => {
            let body = ProblemDetails {
                title: message,
                status: StatusCode::BAD_REQUEST.as_u16(),
                message: format!("error.{error_key}"),
                entity_name: Some(entity_name.to_string()),
                error_key: Some(error_key.to_string()),
                params: Some(entity_name.to_string()),
            };
            let headers = failure_alert(app_name, entity_name, error_key.as_str());
            (StatusCode::BAD_REQUEST, headers, Json(body)).into_response()
        }
        ApplicationError::Db(DbError::RecordNotFound { entity_name, id }) => {
            tracing::debug!("{entity_name} {id} not found");
            let body = ProblemDetails::http(StatusCode::NOT_FOUND, "Not Found");
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
        e => {
            tracing::error!("Request failed: {e}");
            let body = ProblemDetails::http(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hockeyhero_types::errors::ErrorKey;

    #[test]
    fn test_validation_error_is_bad_request() {
        let err: ApplicationError = AppError::id_null("heroDetails").into();
        let response = error_response("hockeyheroApp", err);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("x-hockeyheroapp-error").unwrap(),
            "error.idnull"
        );
    }

    #[test]
    fn test_validation_body_shape() {
        let body = ProblemDetails {
            title: "Invalid id".to_string(),
            status: 400,
            message: format!("error.{}", ErrorKey::IdNull),
            entity_name: Some("heroDetails".to_string()),
            error_key: Some(ErrorKey::IdNull.to_string()),
            params: Some("heroDetails".to_string()),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Invalid id",
                "status": 400,
                "message": "error.idnull",
                "entityName": "heroDetails",
                "errorKey": "idnull",
                "params": "heroDetails",
            })
        );
    }

    #[test]
    fn test_not_found_is_404() {
        let err = ApplicationError::Db(DbError::RecordNotFound {
            entity_name: "heroKeys",
            id: 3,
        });
        let response = error_response("hockeyheroApp", err);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get("x-hockeyheroapp-error").is_none());
    }

    #[test]
    fn test_http_body_omits_entity_fields() {
        let body = ProblemDetails::http(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["message"], "error.http.500");
        assert!(json.get("entityName").is_none());
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err = ApplicationError::Infrastructure("socket closed".to_string());
        let response = error_response("hockeyheroApp", err);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
