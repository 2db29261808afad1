//! Wire-format JSON responses.
//!
//! Clients consume responses positionally, so bodies must render with
//! stable key order, pretty indentation, and literal UTF-8. [`Wire`] pipes
//! DTOs through the core serializer instead of `axum::Json` (which emits
//! compact JSON with no ordering guarantee for dynamic values).

use axum::http::header;
use axum::response::{IntoResponse, Response};

use ladle_core::serializer::{Dto, DtoSerializer, WireValue};

use crate::error::AppError;

/// Response body rendered through the DTO serializer.
#[derive(Debug)]
pub struct Wire(pub WireValue);

impl Wire {
    /// Serialize a single DTO.
    pub fn dto<D: Dto>(dto: &D) -> Self {
        Wire(DtoSerializer::serialize(dto))
    }

    /// Serialize a sequence of DTOs, preserving order.
    pub fn list<'a, D, I>(items: I) -> Self
    where
        D: Dto + 'a,
        I: IntoIterator<Item = &'a D>,
    {
        Wire(WireValue::list(items))
    }
}

impl IntoResponse for Wire {
    fn into_response(self) -> Response {
        match DtoSerializer::to_json(&self.0) {
            Ok(body) => (
                [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(err) => AppError::from(err).into_response(),
        }
    }
}
