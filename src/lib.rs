//! BOTA - crew catalog and combat overlay widgets

pub mod core;
pub mod crew;
pub mod render;
pub mod ui;
