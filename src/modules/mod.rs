//! Feature modules.
//!
//! Each module follows the same layout:
//!
//! - `controller.rs`: typed handlers and their OpenAPI annotations
//! - `service.rs`: business logic over the store
//! - `router.rs`: the route table, including each route's gate chain

pub mod auth;
pub mod index;
pub mod users;
