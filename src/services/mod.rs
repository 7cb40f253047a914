//! Domain services used by the HTTP routes.
//!
//! Service modules own the generation logic so route handlers stay focused
//! on wire translation and status mapping.

pub mod diagram;
