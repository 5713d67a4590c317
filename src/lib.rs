pub mod admin;
pub mod labels;
pub mod likert;
pub mod logging;
pub mod profile;
pub mod server;
pub mod store;
