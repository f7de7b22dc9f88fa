//! Best-move client
//!
//! [`ChessApiClient`] is stateless apart from its transport and endpoint:
//! each query builds a fresh payload, issues exactly one request and decodes
//! the reply. Nothing is cached or retried.

use tracing::debug;

use crate::config::DEFAULT_ENDPOINT;
use crate::error::ChessApiResult;
use crate::request::{MoveConstraint, QueryRequest};
use crate::response::decode_best_move;
use crate::transport::{HttpRequest, HttpTransport};

const CONTENT_TYPE: &str = "application/json";

/// Client for the remote move-analysis service
///
/// # Examples
///
/// ```no_run
/// use chess_api::{ChessApiClient, ReqwestTransport};
///
/// # async fn run() -> chess_api::ChessApiResult<()> {
/// let client = ChessApiClient::new(ReqwestTransport::new());
/// let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
/// let san = client.get_best_move(fen, &["e2e4", "d2d4"], Some(12)).await?;
/// println!("{san}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ChessApiClient<T> {
    transport: T,
    endpoint: String,
}

impl<T: HttpTransport> ChessApiClient<T> {
    /// Client for the public endpoint
    pub fn new(transport: T) -> Self {
        Self::with_endpoint(transport, DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Asks the engine for its move in `position`
    ///
    /// # Arguments
    ///
    /// * `position` - FEN string, forwarded without inspection
    /// * `allowed_moves` - restricts the search to these coordinate moves;
    ///   empty means any move
    /// * `depth` - search depth in plies; `None` uses the service default
    ///
    /// Returns the chosen move in SAN, exactly as the service sent it.
    pub async fn get_best_move<S: AsRef<str>>(
        &self,
        position: &str,
        allowed_moves: &[S],
        depth: Option<u32>,
    ) -> ChessApiResult<String> {
        let constraint = MoveConstraint {
            allowed_moves: allowed_moves.iter().map(|m| m.as_ref().to_owned()).collect(),
            depth,
        };
        self.best_move(position, &constraint).await
    }

    /// Same as [`get_best_move`](Self::get_best_move) with a prebuilt constraint
    pub async fn best_move(
        &self,
        position: &str,
        constraint: &MoveConstraint,
    ) -> ChessApiResult<String> {
        let body = QueryRequest::new(position, constraint).to_body()?;
        debug!(endpoint = %self.endpoint, bytes = body.len(), "sending best-move query");

        let request = HttpRequest::post(self.endpoint.as_str())
            .with_header("Content-Type", CONTENT_TYPE)
            .with_body(body);

        let response = self.transport.send(request).await?;
        decode_best_move(&response)
    }
}

#[cfg(feature = "reqwest")]
impl ChessApiClient<crate::reqwest_transport::ReqwestTransport> {
    /// Builds a reqwest-backed client from `config`
    pub fn from_config(config: &crate::config::ClientConfig) -> ChessApiResult<Self> {
        let transport =
            crate::reqwest_transport::ReqwestTransport::with_timeout(config.timeout())?;
        Ok(Self::with_endpoint(transport, config.endpoint.clone()))
    }
}
