/// State management module
///
/// This module handles all application state, including:
/// - The site document data model (data.rs)
/// - Loading the document off the UI thread (load.rs)
/// - The lightbox slider state machine (lightbox.rs)

pub mod data;
pub mod lightbox;
pub mod load;
