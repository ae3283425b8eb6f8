use std::ops::RangeInclusive;

/// Output property holding the backlight level
pub const BACKLIGHT_PROPERTY: &str = "BACKLIGHT";

/// Oldest RandR version with output properties
pub const RANDR_MIN_VERSION: (u32, u32) = (1, 2);

/// The property value is a single 32 bit `INTEGER`
pub const PROPERTY_FORMAT: u8 = 32;

/// Largest value the slider can reach
pub const SLIDER_UPPER: f64 = 100.001;

/// Slider step, page increment and page size
pub const SLIDER_STEP: f64 = 0.001;

/// Range of valid values for `window.digits`
pub const DIGITS_RANGE: RangeInclusive<i32> = 0..=3;

/// Matches every output name
pub const MATCH_ALL_OUTPUTS: &str = ".";

pub const CONFIG_DIR: &str = "gbacklight";
pub const CONFIG_FILE: &str = "config.toml";
