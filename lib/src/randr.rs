use x11rb::connection::{Connection, RequestConnection};
use x11rb::protocol::randr::{self, ConnectionExt as _, Output};
use x11rb::protocol::xproto::{Atom, AtomEnum, ConnectionExt as _, PropMode, Window};
use x11rb::rust_connection::RustConnection;

use crate::backend::Backend;
use crate::consts::*;
use crate::errors::*;
use crate::property::{PropertyInfo, RawProperty};

make_log_macro!(debug, "randr");

/// [`Backend`] talking to an X server through the RandR extension.
pub struct RandrBackend {
    conn: RustConnection,
    roots: Vec<Window>,
}

impl RandrBackend {
    /// Connect to `display` (or `$DISPLAY`) and make sure RandR can do output properties.
    pub fn connect(display: Option<&str>) -> Result<Self> {
        let (conn, _) = x11rb::connect(display).map_err(|e| {
            debug!("{e}");
            GbacklightError::CannotOpenDisplay(display_name(display))
        })?;

        if conn
            .extension_information(randr::X11_EXTENSION_NAME)?
            .is_none()
        {
            return Err(GbacklightError::RandrMissing);
        }

        let (want_major, want_minor) = RANDR_MIN_VERSION;
        let version = conn.randr_query_version(want_major, want_minor)?.reply()?;
        let (major, minor) = (version.major_version, version.minor_version);
        debug!("RandR {major}.{minor}");
        check_randr_version(major, minor)?;

        let roots = conn.setup().roots.iter().map(|screen| screen.root).collect();

        Ok(Self { conn, roots })
    }
}

/// Output properties need RandR 1.2.
fn check_randr_version(major: u32, minor: u32) -> Result<()> {
    if (major, minor) < RANDR_MIN_VERSION {
        return Err(GbacklightError::RandrTooOld { major, minor });
    }
    Ok(())
}

/// The name Xlib would report for `display`.
fn display_name(display: Option<&str>) -> String {
    match display {
        Some(name) => name.to_string(),
        None => std::env::var("DISPLAY").unwrap_or_default(),
    }
}

impl Backend for RandrBackend {
    fn intern_property(&self, name: &str) -> Result<Option<Atom>> {
        let atom = self.conn.intern_atom(true, name.as_bytes())?.reply()?.atom;
        Ok((atom != x11rb::NONE).then_some(atom))
    }

    fn outputs(&self) -> Result<Vec<Output>> {
        let mut outputs = Vec::new();
        for (screen, &root) in self.roots.iter().enumerate() {
            match self.conn.randr_get_screen_resources(root)?.reply() {
                Ok(resources) => outputs.extend(resources.outputs),
                Err(e) => {
                    debug!("skipping screen {screen}: {e}");
                }
            }
        }
        Ok(outputs)
    }

    fn output_name(&self, output: Output) -> Result<String> {
        let info = self
            .conn
            .randr_get_output_info(output, x11rb::CURRENT_TIME)?
            .reply()?;
        Ok(String::from_utf8_lossy(&info.name).into_owned())
    }

    fn output_property(&self, output: Output, property: Atom) -> Result<RawProperty> {
        let reply = self
            .conn
            .randr_get_output_property(
                output,
                property,
                Atom::from(AtomEnum::ANY),
                0,
                4,
                false,
                false,
            )?
            .reply()?;
        Ok(reply.into())
    }

    fn query_output_property(&self, output: Output, property: Atom) -> Result<PropertyInfo> {
        let reply = self
            .conn
            .randr_query_output_property(output, property)?
            .reply()?;
        Ok(reply.into())
    }

    fn change_output_property(
        &self,
        output: Output,
        property: Atom,
        value: &RawProperty,
    ) -> Result<()> {
        self.conn
            .randr_change_output_property(
                output,
                property,
                value.type_,
                value.format,
                PropMode::REPLACE,
                value.num_items,
                &value.data,
            )?
            .ignore_error();
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(self.conn.flush()?)
    }
}
