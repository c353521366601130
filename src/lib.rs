//! HTTP gateway that stores opaque payloads in a document store and hands
//! one of them back on request.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod storage;
pub mod utils;
