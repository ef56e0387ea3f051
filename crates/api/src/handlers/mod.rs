//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod event;
pub mod export;
pub mod performer;
pub mod scan;
pub mod ticket;
pub mod ticket_type;
pub mod user;
