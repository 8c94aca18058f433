//! Web module for TeenyHost.
//!
//! This module provides the HTTP surface of the service: the upload API,
//! the server-rendered landing and viewer pages, and the static download
//! path for raw file bytes.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
