//! HTTP adapter for the docvoz assistant backend.
//!
//! Implements `docvoz_core::AssistantBackend` over the four backend
//! endpoints (`/process`, `/complement`, `/chat`, `/suggestions`). The HTTP
//! transport sits behind the [`HttpBackend`] trait so wire parsing and
//! error mapping are testable without a network.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod http;
mod wire;

pub use client::{DefaultDocvozClient, DocvozClient};
pub use config::BackendClientConfig;
pub use http::{HttpBackend, HttpResponse, ReqwestBackend};
