use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::consts::*;
use crate::errors::*;
use crate::property::PropertyRange;

macro_rules! make_log_macro {
    (@wdoll $macro_name:ident, $block_name:literal, ($dol:tt)) => {
        #[allow(unused_macros)]
        macro_rules! $macro_name {
            ($dol($args:tt)+) => {
                ::log::$macro_name!(target: $block_name, $dol($args)+);
            };
        }
    };
    ($macro_name:ident, $block_name:literal) => {
        make_log_macro!(@wdoll $macro_name, $block_name, ($));
    };
}

pub fn deserialize_toml_file<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let contents = std::fs::read_to_string(path)?;

    toml::from_str(&contents).map_err(|err| {
        #[allow(deprecated)]
        let location_msg = err
            .span()
            .map(|span| {
                let line = 1 + contents.as_bytes()[..(span.start)]
                    .iter()
                    .filter(|b| **b == b'\n')
                    .count();
                format!(" at line {line}")
            })
            .unwrap_or_default();
        GbacklightError::Other(format!(
            "Failed to deserialize TOML file {}{}: {}",
            path.display(),
            location_msg,
            err.message()
        ))
    })
}

/// `$XDG_CONFIG_HOME/gbacklight/config.toml`, if it exists.
pub fn find_config_file() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
        .filter(|path| path.is_file())
}

/// Scale a slider percentage (0-100) into the native range of a property.
///
/// Values outside the range are clamped to it and the result is truncated
/// toward zero.
pub fn percentage_to_native(percentage: f64, range: PropertyRange) -> i32 {
    let min = f64::from(range.min);
    let max = f64::from(range.max);
    let value = min + percentage * (max - min) / 100.0;
    value.min(max).max(min) as i32
}

/// Scale a native property value into a slider percentage.
///
/// Unlike [`percentage_to_native`] the value is not offset by `range.min`,
/// so the two only round-trip for ranges starting at zero.
pub fn native_to_percentage(native: i32, range: PropertyRange) -> f64 {
    let span = i64::from(range.max) - i64::from(range.min);
    if span == 0 {
        return 0.0;
    }
    (i64::from(native) * 100) as f64 / span as f64
}
