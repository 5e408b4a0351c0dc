pub mod auth;
pub mod discovery;
pub mod notification;
pub mod profile;
pub mod request;
