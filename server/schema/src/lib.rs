//! sea-orm entities for the mentorlink tables.

pub mod mentorship_requests;
pub mod notifications;
pub mod profiles;
pub mod users;
