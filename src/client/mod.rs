//! Vector Store Client Module
//!
//! Typed, error-returning HTTP access to a hosted vector-index service
//! (upsert, similarity query, delete).

mod config;
mod error;
mod types;
mod vector_store;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use types::{
    DeleteRequest, Metadata, QueryMatch, QueryRequest, QueryResponse, UpsertRequest, Vector,
};
pub use vector_store::VectorStoreClient;
