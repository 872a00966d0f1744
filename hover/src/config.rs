use serde_derive::Deserialize;

/// Timing, placement and attribute names for a tooltip. Every field may be
/// omitted when deserialising, in which case the default is used.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Milliseconds between the pointer entering a target and the tooltip
    /// appearing.
    pub show_delay: u32,

    /// Milliseconds between leaving or clicking a target and the tooltip
    /// disappearing. Kept shorter than `show_delay`.
    pub hide_delay: u32,

    /// Milliseconds a shown tooltip stays up with no further triggers. `None`
    /// leaves it up until the pointer leaves.
    pub auto_hide: Option<u32>,

    /// Gap in pixels between the pointer and the bottom of the tooltip.
    pub offset: f64,

    /// Attribute holding the tooltip text.
    pub attribute: String,

    /// Attribute which makes a click show the tooltip rather than hide it.
    pub show_on_click: String,

    /// Class name of the overlay element, for host stylesheets.
    pub class: String,
}

impl Config {
    pub const SHOW_DELAY: u32 = 500;
    pub const HIDE_DELAY: u32 = 50;
    pub const AUTO_HIDE: u32 = 3000;
    pub const OFFSET: f64 = 15.0;
    pub const ATTRIBUTE: &'static str = "data-tooltip";
    pub const SHOW_ON_CLICK: &'static str = "data-tooltip-show-on-click";
    pub const CLASS: &'static str = "tooltip";

    /// Returns this config with the hide delay clamped below the show delay
    /// and a negative or non-finite offset replaced by the default.
    #[must_use]
    pub fn validated(mut self) -> Self {
        if self.hide_delay >= self.show_delay {
            self.hide_delay = self.show_delay.saturating_sub(1);
        }

        if !self.offset.is_finite() || self.offset < 0.0 {
            self.offset = Self::OFFSET;
        }

        self
    }

    /// CSS selector matching elements which carry tooltip text.
    pub fn selector(&self) -> String {
        format!("[{}]", self.attribute)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_delay: Self::SHOW_DELAY,
            hide_delay: Self::HIDE_DELAY,
            auto_hide: Some(Self::AUTO_HIDE),
            offset: Self::OFFSET,
            attribute: Self::ATTRIBUTE.to_string(),
            show_on_click: Self::SHOW_ON_CLICK.to_string(),
            class: Self::CLASS.to_string(),
        }
    }
}
