//! VEXA - Vector Index HTTP Client
//!
//! A typed async client for hosted vector-index REST APIs: upsert vectors
//! with optional metadata, run top-k similarity queries, delete by id.

pub mod client;

pub use client::{
    ClientConfig, Error, Metadata, QueryMatch, QueryRequest, QueryResponse, Result, Vector,
    VectorStoreClient,
};
