//! um-client library
//!
//! HTTP adapter for the user administration REST API. [`Client`] implements
//! [`um_core::UserService`] so the users handler can talk to a real server.

pub(crate) mod client;
pub(crate) mod user_service;

#[cfg(test)]
mod tests;

pub use client::{Client, ClientError, ClientResult};
