pub mod background;
pub mod controller;
pub mod controls;
pub mod info;
pub mod selection;
pub mod viewer;

pub use viewer::*;
