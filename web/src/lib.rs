pub mod app;
pub mod config;
pub mod grid;
pub mod sections;

pub use app::App;
