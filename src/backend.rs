//! HTTP layer: routes, handlers and request/response models.
pub mod handlers;
pub mod models;
pub mod router;
