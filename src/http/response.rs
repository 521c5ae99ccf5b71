//! Response shaping.
//!
//! A pipeline failure is a terminal request failure: 500 with a JSON body
//! naming the error, the request and any checkpoints it passed.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::diagnostics::Diagnosed;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub request_id: String,
    pub checkpoints: Vec<String>,
}

impl ErrorBody {
    pub fn from_diagnosed<E: fmt::Display>(err: &Diagnosed<E>, request_id: &str) -> Self {
        Self {
            error: err.to_string(),
            request_id: request_id.to_string(),
            checkpoints: err.diagnostics().checkpoints.clone(),
        }
    }
}

pub fn failure<E: fmt::Display>(err: &Diagnosed<E>, request_id: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::from_diagnosed(err, request_id)),
    )
        .into_response()
}
