//! API endpoint handlers.
//!
//! Handlers take the store lock for one operation, release it, and build
//! the response from the views module. User events go through the view
//! controllers, whose state lives in `CoreState`'s panels.

pub mod admin;
pub mod cards;
pub mod filters;
pub mod health;
pub mod map;
pub mod profiles;
pub mod queries;
pub mod selection;
pub mod view;
