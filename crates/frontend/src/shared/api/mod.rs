//! Backend access: one authenticated client, typed per-resource gateways.

pub mod client;
pub mod error;
pub mod gateway;

pub use client::{use_api, ApiClient};
pub use error::ApiError;
pub use gateway::{use_gateway, Attachment, Gateway, Submission};
