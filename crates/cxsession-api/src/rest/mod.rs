//! Dialogflow CX REST client.
//!
//! Implements `SessionEntityTypesClient` over the `v3beta1` REST surface
//! (https://dialogflow.googleapis.com/v3beta1). The host is derived from
//! each request's `locations/<L>` segment unless a fixed endpoint is
//! configured. Authentication is a bearer access token supplied by the
//! caller.

mod api;
mod client;
mod config;

pub use client::RestClient;
pub use config::RestConfig;
