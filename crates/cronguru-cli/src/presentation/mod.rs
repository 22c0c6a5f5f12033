//! Presentation layer
//!
//! - `view_models`: plain data describing one frame
//! - `presenters`: pure functions from editor state to view models
//! - `views`: Ratatui widgets that draw a view model
//! - `renderers`: the terminal event loop

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;
