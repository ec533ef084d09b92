//! Types shared between the feedback client and the API server.

pub mod domain;
pub mod shared;
