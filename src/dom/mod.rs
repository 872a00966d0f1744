pub mod element;
pub mod listeners;
pub mod overlay;
pub mod timer;
