//! HTTP protocol layer module
//!
//! Protocol-level building blocks shared by the page handlers and the
//! static file server: response builders, MIME lookup, cache validation,
//! and form decoding. Decoupled from page-specific business logic.

pub mod cache;
pub mod form;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_500_response, build_html_response, build_options_response, build_redirect_response,
};
