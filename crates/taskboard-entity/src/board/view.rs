//! Aggregated board detail view returned by `GET /api/boards/{id}`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::card::{Card, Label};
use crate::list::List;
use crate::user::{UserRole, UserSummary};

use super::model::Board;

/// A board member with profile fields joined in.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BoardMemberProfile {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Optional avatar image URL.
    pub avatar_url: Option<String>,
    /// Role within the board.
    pub role: UserRole,
}

/// A card with its members, labels, and counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDetail {
    /// The card itself.
    #[serde(flatten)]
    pub card: Card,
    /// Users assigned to the card.
    pub members: Vec<UserSummary>,
    /// Labels attached to the card.
    pub labels: Vec<Label>,
    /// Number of comments on the card.
    pub comments_count: i64,
    /// Number of attachments on the card.
    pub attachments_count: i64,
}

/// A list with its cards in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListWithCards {
    /// The list itself.
    #[serde(flatten)]
    pub list: List,
    /// Cards ordered by position.
    pub cards: Vec<CardDetail>,
}

/// Full board aggregation: board, members, and ordered lists of cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardDetail {
    /// The board.
    pub board: Board,
    /// Lists with nested cards, ordered by position.
    pub lists: Vec<ListWithCards>,
    /// Board members.
    pub members: Vec<BoardMemberProfile>,
}
