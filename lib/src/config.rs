use crate::consts::*;
use crate::errors::*;
use crate::util::*;

use std::path::Path;

use serde::Deserialize;
use serde::Deserializer;
use smart_default::SmartDefault;

make_log_macro!(debug, "config");

#[derive(Deserialize, Clone, Debug, SmartDefault)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    #[default("gbacklight")]
    pub title: String,

    /// Size request of the slider
    #[default(350)]
    pub width: i32,

    #[default(40)]
    pub height: i32,

    /// Space between the window edge and its contents
    #[default(50)]
    pub margin: i32,

    /// Decimal places shown next to the slider
    #[default(2)]
    #[serde(deserialize_with = "deserialize_digits")]
    pub digits: i32,
}

fn deserialize_digits<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let digits = Deserialize::deserialize(deserializer)?;
    debug!("{:?}", digits);

    if !DIGITS_RANGE.contains(&digits) {
        return Err(serde::de::Error::invalid_value(
            serde::de::Unexpected::Signed(digits.into()),
            &"number in the range of 0 to 3",
        ));
    }

    Ok(digits)
}

fn deserialize_property<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let property: String = Deserialize::deserialize(deserializer)?;
    debug!("{:?}", property);

    if property.is_empty() {
        return Err(serde::de::Error::invalid_length(0, &"a property name"));
    }

    Ok(property)
}

#[derive(Deserialize, Clone, Debug, SmartDefault)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct GbacklightConfig {
    /// Output property to drive
    #[default(BACKLIGHT_PROPERTY.to_string())]
    #[serde(deserialize_with = "deserialize_property")]
    pub property: String,

    /// Regular expression for the output names to control
    #[default(MATCH_ALL_OUTPUTS.to_string())]
    pub outputs: String,

    pub window: WindowConfig,
}

impl GbacklightConfig {
    /// Read the user's config file, falling back to defaults when there is none.
    pub fn new() -> Result<Self> {
        if let Some(config_path) = find_config_file() {
            debug!("loading {}", config_path.display());
            Self::from_path(config_path)
        } else {
            debug!("no config file, using defaults");
            Ok(GbacklightConfig::default())
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        deserialize_toml_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GbacklightConfig::default();
        assert_eq!(config.property, "BACKLIGHT");
        assert_eq!(config.outputs, ".");
        assert_eq!(config.window.title, "gbacklight");
        assert_eq!((config.window.width, config.window.height), (350, 40));
        assert_eq!(config.window.margin, 50);
        assert_eq!(config.window.digits, 2);
    }

    #[test]
    fn empty_file_is_default() {
        let config: GbacklightConfig = toml::from_str("").unwrap();
        assert_eq!(config.property, BACKLIGHT_PROPERTY);
        assert_eq!(config.window.digits, 2);
    }

    #[test]
    fn partial_file() {
        let config: GbacklightConfig = toml::from_str(
            r#"
            property = "Backlight"
            outputs = "^eDP"

            [window]
            digits = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.property, "Backlight");
        assert_eq!(config.outputs, "^eDP");
        assert_eq!(config.window.digits, 0);
        assert_eq!(config.window.width, 350);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(toml::from_str::<GbacklightConfig>("property = \"\"").is_err());
        assert!(toml::from_str::<GbacklightConfig>("[window]\ndigits = 7").is_err());
        assert!(toml::from_str::<GbacklightConfig>("brightness = 3").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = GbacklightConfig::from_path("/nonexistent/gbacklight.toml").unwrap_err();
        assert!(matches!(err, GbacklightError::Io(_)));
    }
}
