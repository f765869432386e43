pub mod api;
pub mod canvas;
pub mod chart;
pub mod ui;
