//! meshboard-ui: the egui front end of meshboard.

pub mod app;
pub mod editor;

pub use app::MeshboardApp;
