//! # chess_api
//!
//! Client for the chess-api.com move-analysis service. Submits a FEN position,
//! optionally restricted to a set of candidate moves and a search depth, and
//! returns the engine's chosen move in standard algebraic notation.
//!
//! ## Module Organization
//!
//! - `client` - [`ChessApiClient`], the query entry point
//! - `request` - payload construction ([`MoveConstraint`], [`QueryRequest`])
//! - `response` - status, JSON shape and inline-error validation
//! - `transport` - the [`HttpTransport`] seam and its request/response values
//! - `reqwest_transport` - production transport (feature `reqwest`, on by default)
//! - `config` - endpoint and timeout settings
//! - `error` - [`ChessApiError`] and its kind discriminator
//!
//! No chess rules live here. Positions and moves are opaque strings, and the
//! remote engine is the only judge of their validity.

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

#[cfg(feature = "reqwest")]
pub mod reqwest_transport;

pub use client::ChessApiClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{BoxError, ChessApiError, ChessApiErrorKind, ChessApiResult};
pub use request::{MoveConstraint, QueryRequest};
pub use response::decode_best_move;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method};

#[cfg(feature = "reqwest")]
pub use reqwest_transport::ReqwestTransport;
