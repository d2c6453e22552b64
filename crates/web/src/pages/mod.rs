//! HTML pages

mod reply;
mod views;

pub(crate) use reply::*;
pub(crate) use views::*;
