//! API middleware.
//!
//! Only request logging lives here; the store applies no access control.

pub mod access_log;
