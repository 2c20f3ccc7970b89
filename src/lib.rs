//! SHARP scene service
//!
//! Library half of the sharp-scene service: the SHARP job boundary, the scene
//! lookup consumed by the hero viewer, and the image proxy that serves preview
//! images from our own origin.

pub mod app_state;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
