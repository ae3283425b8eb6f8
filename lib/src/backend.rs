use x11rb::protocol::randr::Output;
use x11rb::protocol::xproto::Atom;

use crate::errors::*;
use crate::property::{PropertyInfo, RawProperty};

/// The display server requests needed to drive an output property.
pub trait Backend {
    /// Atom for `name`, or `None` if the server has never seen it.
    fn intern_property(&self, name: &str) -> Result<Option<Atom>>;

    /// Every output of every screen, in screen order.
    fn outputs(&self) -> Result<Vec<Output>>;

    fn output_name(&self, output: Output) -> Result<String>;

    fn output_property(&self, output: Output, property: Atom) -> Result<RawProperty>;

    fn query_output_property(&self, output: Output, property: Atom) -> Result<PropertyInfo>;

    /// Replace the property's value. Not visible until [`Backend::flush`].
    fn change_output_property(
        &self,
        output: Output,
        property: Atom,
        value: &RawProperty,
    ) -> Result<()>;

    fn flush(&self) -> Result<()>;
}
