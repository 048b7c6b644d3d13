//! Card entity and labels.

pub mod model;

pub use model::{Card, CreateCard, Label, MoveCard, UpdateCard};
