//! Session entity type operations.
//!
//! `SessionEntityTypes` builds requests, normalizes resource paths for the
//! chosen environment, and forwards calls to a `SessionEntityTypesClient`.
//! It holds no mutable state, so one instance can be shared freely.

mod service;


pub use service::SessionEntityTypes;
