mod helpers;

mod auth_test;
mod profile_test;
