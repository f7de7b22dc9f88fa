//! Request payload construction
//!
//! Builds the JSON body sent to the analysis endpoint. Optional constraints
//! are omitted from the payload entirely rather than sent as `null`.

use serde::Serialize;

/// Optional per-request limits on what the engine may answer
///
/// # Examples
///
/// ```
/// use chess_api::MoveConstraint;
///
/// let constraint = MoveConstraint::new()
///     .allowed_moves(["e2e4", "d2d4"])
///     .depth(12);
/// assert_eq!(constraint.search_moves().as_deref(), Some("e2e4 d2d4"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveConstraint {
    /// Candidate moves in coordinate notation; empty means unconstrained
    pub allowed_moves: Vec<String>,
    /// Search depth in plies; `None` leaves it to the service
    pub depth: Option<u32>,
}

impl MoveConstraint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allowed_moves<I, S>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_moves = moves.into_iter().map(Into::into).collect();
        self
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Space-joined move list, or `None` when unconstrained
    pub fn search_moves(&self) -> Option<String> {
        if self.allowed_moves.is_empty() {
            None
        } else {
            Some(self.allowed_moves.join(" "))
        }
    }
}

/// Wire payload for a best-move query
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QueryRequest<'a> {
    #[serde(rename = "fen")]
    pub position: &'a str,

    #[serde(rename = "searchmoves", skip_serializing_if = "Option::is_none")]
    pub search_constraint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}

impl<'a> QueryRequest<'a> {
    pub fn new(position: &'a str, constraint: &MoveConstraint) -> Self {
        Self {
            position,
            search_constraint: constraint.search_moves(),
            depth: constraint.depth,
        }
    }

    /// Serializes the payload to the JSON request body
    pub fn to_body(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
