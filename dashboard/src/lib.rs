//! iced front end for the Phoenix radar operator console.

pub mod api;
pub mod app;
pub mod scope;
