//! GUI module: a native egui/eframe front end for the game

mod app;
mod board_view;
mod session;
mod theme;

pub use app::GobangApp;
pub use session::Session;
