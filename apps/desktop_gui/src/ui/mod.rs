//! UI layer for the world form: app shell and panels.

pub mod app;
mod panels;

pub use app::{StartupConfig, WorldFormApp};
