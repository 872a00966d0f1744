//! Framework independent hover tooltip logic: when to show and hide a single
//! floating overlay and where to put it.

pub mod config;
pub mod delegate;
mod point;
mod tooltip;

pub use config::Config;
pub use point::{position, Point, Size};
pub use tooltip::{Action, Overlay, Timer, Token, Tooltip};
