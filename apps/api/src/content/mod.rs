// Portfolio content: the profile and project gallery served to the site.
// Loaded once at startup and never written afterwards.

pub mod handlers;
pub mod models;
pub mod seed;
pub mod store;
