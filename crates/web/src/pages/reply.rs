//! Page replies.

use askama::Template;
use salvo::{
    http::StatusCode,
    prelude::{Response, StatusError},
    writing::{Json, Scribe, Text},
};
use serde::Serialize;

use crate::extensions::*;

pub(crate) const CAR_NOT_FOUND: &str = "Car not found";

/// JSON body of a not-found error.
#[derive(Debug, Serialize)]
pub(crate) struct NotFoundDetail {
    pub detail: &'static str,
}

/// What an HTML route sends back.
#[derive(Debug)]
pub(crate) enum PageReply {
    /// A rendered page.
    Html(String),

    /// 404 with a plain-text body.
    CarNotFoundText,

    /// 404 with a `{"detail": ...}` JSON body.
    CarNotFoundJson,
}

impl PageReply {
    /// Render a template, logging failures as internal errors.
    pub(crate) fn page<T: Template>(page: &T) -> Result<Self, StatusError> {
        page.render()
            .map(Self::Html)
            .or_500("failed to render template")
    }
}

impl Scribe for PageReply {
    fn render(self, res: &mut Response) {
        match self {
            Self::Html(body) => res.render(Text::Html(body)),
            Self::CarNotFoundText => {
                res.status_code(StatusCode::NOT_FOUND);
                res.render(Text::Plain(CAR_NOT_FOUND));
            }
            Self::CarNotFoundJson => {
                res.status_code(StatusCode::NOT_FOUND);
                res.render(Json(NotFoundDetail {
                    detail: CAR_NOT_FOUND,
                }));
            }
        }
    }
}
