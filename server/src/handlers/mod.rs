pub mod auth;
pub mod notification;
pub mod pair;
pub mod profile;
pub mod request;
