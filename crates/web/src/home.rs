//! Landing Page Handler

use salvo::prelude::*;

use crate::pages::{HomePage, PageReply};

/// Landing Page Handler
#[handler]
pub(crate) async fn handler() -> Result<PageReply, StatusError> {
    PageReply::page(&HomePage)
}
