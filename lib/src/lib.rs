#![warn(clippy::match_same_arms)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::unnecessary_wraps)]

#[macro_use]
mod util;
mod backend;
mod config;
mod consts;
mod errors;
mod property;
mod randr;

use regex::Regex;
use x11rb::protocol::randr::Output;
use x11rb::protocol::xproto::Atom;

pub use crate::backend::Backend;
pub use crate::config::{GbacklightConfig, WindowConfig};
pub use crate::consts::{SLIDER_STEP, SLIDER_UPPER};
use crate::consts::*;
pub use crate::errors::{GbacklightError, Result};
pub use crate::property::{BacklightValue, PropertyInfo, PropertyRange, RawProperty};
pub use crate::randr::RandrBackend;
pub use crate::util::{native_to_percentage, percentage_to_native};

make_log_macro!(debug, "gbacklight");

/// Used to construct [`Gbacklight`]
#[derive(Default)]
pub struct GbacklightBuilder<'a> {
    display: Option<&'a str>,
    output_regex: Option<&'a str>,
    config: Option<GbacklightConfig>,
}

impl<'a> GbacklightBuilder<'a> {
    /// Create a new [`GbacklightBuilder`].
    pub fn new() -> Self {
        GbacklightBuilder::default()
    }

    /// Defaults to `$DISPLAY`.
    pub fn with_display(mut self, display: Option<&'a str>) -> Self {
        self.display = display;
        self
    }

    /// Defaults to the `outputs` regex of the config.
    pub fn with_output_regex(mut self, output_regex: Option<&'a str>) -> Self {
        self.output_regex = output_regex;
        self
    }

    /// Defaults to [`GbacklightConfig::new()`].
    pub fn with_config(mut self, config: GbacklightConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Connect to the X server and return the constructed [`Gbacklight`] instance.
    pub fn build(self) -> Result<Gbacklight> {
        let backend = RandrBackend::connect(self.display)?;
        self.build_with_backend(backend)
    }

    /// Like [`GbacklightBuilder::build`], on an already connected backend.
    pub fn build_with_backend<B: Backend>(self, backend: B) -> Result<Gbacklight<B>> {
        let config = match self.config {
            Some(config) => config,
            None => GbacklightConfig::new()?,
        };
        let output_regex = self.output_regex.unwrap_or(config.outputs.as_str());

        Gbacklight::new(backend, &config.property, Regex::new(output_regex)?)
    }
}

/// Drives one output property on every output that has it.
pub struct Gbacklight<B: Backend = RandrBackend> {
    backend: B,
    property: Atom,
    property_name: String,
    /// `None` when every output is controlled
    output_regex: Option<Regex>,
}

impl<B: Backend> Gbacklight<B> {
    pub(crate) fn new(backend: B, property_name: &str, output_regex: Regex) -> Result<Self> {
        let property = backend
            .intern_property(property_name)?
            .ok_or_else(|| GbacklightError::NoBacklightProperty(property_name.to_string()))?;
        debug!("{property_name} is atom {property}");

        let output_regex = (output_regex.as_str() != MATCH_ALL_OUTPUTS).then_some(output_regex);

        Ok(Self {
            backend,
            property,
            property_name: property_name.to_string(),
            output_regex,
        })
    }

    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// Current native value of the property, or `None` if the output does not support it.
    pub fn get_current(&self, output: Output) -> Option<BacklightValue> {
        match self.backend.output_property(output, self.property) {
            Ok(raw) => raw.integer(),
            Err(e) => {
                debug!("output {output}: {e}");
                None
            }
        }
    }

    /// Declared range of the property, or `None` if it is not a two-value range.
    pub fn get_range(&self, output: Output) -> Option<PropertyRange> {
        match self.backend.query_output_property(output, self.property) {
            Ok(info) => info.bounds(),
            Err(e) => {
                debug!("output {output}: {e}");
                None
            }
        }
    }

    /// Queue a write of `value`. Call [`Backend::flush`] to make it visible.
    pub fn set_current(&self, output: Output, value: BacklightValue) -> Result<()> {
        self.backend.change_output_property(
            output,
            self.property,
            &RawProperty::from_integer(value),
        )
    }

    /// Outputs of all screens that pass the output regex.
    fn outputs(&self) -> Result<Vec<Output>> {
        let outputs = self.backend.outputs()?;
        let Some(regex) = &self.output_regex else {
            return Ok(outputs);
        };

        Ok(outputs
            .into_iter()
            .filter(|&output| match self.backend.output_name(output) {
                Ok(name) => {
                    let matched = regex.is_match(&name);
                    debug!("{name:?} matched {}: {matched}", regex.as_str());
                    matched
                }
                Err(e) => {
                    debug!("output {output}: {e}");
                    false
                }
            })
            .collect())
    }

    /// Current value and range of every output that supports the property.
    fn supported_outputs(
        &self,
    ) -> Result<impl Iterator<Item = (Output, BacklightValue, PropertyRange)> + '_> {
        Ok(self.outputs()?.into_iter().filter_map(|output| {
            let current = self.get_current(output)?;
            let range = self.get_range(output)?;
            Some((output, current, range))
        }))
    }

    /// Brightness of the first supporting output as a slider percentage, 0 if there is none.
    pub fn get_percentage(&self) -> Result<f64> {
        Ok(match self.supported_outputs()?.next() {
            Some((output, current, range)) => {
                debug!("output {output}: {current} in {range:?}");
                native_to_percentage(current, range)
            }
            None => {
                debug!("no output supports {}", self.property_name);
                0.0
            }
        })
    }

    /// Scale `percentage` into each supporting output's range and write it.
    pub fn set_percentage(&self, percentage: f64) -> Result<()> {
        for (output, _, range) in self.supported_outputs()? {
            let value = percentage_to_native(percentage, range);
            debug!("output {output}: {percentage} -> {value}");
            if let Err(e) = self.set_current(output, value) {
                debug!("output {output}: {e}");
                continue;
            }
            self.backend.flush()?;
        }
        Ok(())
    }
}
