//! Board entity, membership, and the aggregated detail view.

pub mod model;
pub mod view;

pub use model::{Board, BoardMember, CreateBoard};
pub use view::{BoardDetail, BoardMemberProfile, CardDetail, ListWithCards};
