//! Comment module
//!
//! Stakeholder comment records, their builder and validation.

pub mod model;
pub mod validator;
pub mod builder;

pub use model::*;
pub use validator::CommentValidator;
pub use builder::CommentBuilder;
