//! Stateless JWT capability: token issue/validation and the axum identity
//! extractor used by every authenticated route.

pub mod extract;
pub mod token;
