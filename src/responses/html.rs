use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    let body = markup.into_string();

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// htmx leaves the target untouched on a 204.
pub fn no_content() -> ResultResp {
    ResponseBuilder::new()
        .status(204)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
