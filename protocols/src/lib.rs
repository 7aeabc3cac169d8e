//! Protocol helpers used to probe local web services.

pub mod html;
pub mod http;
pub mod openapi;
