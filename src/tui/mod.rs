//! Terminal User Interface (TUI) for interactive checkers

pub mod app;
pub mod board_widget;
pub mod theme;

pub use app::TuiApp;
pub use theme::Theme;
