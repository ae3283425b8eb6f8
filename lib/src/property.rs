use x11rb::protocol::randr::{GetOutputPropertyReply, QueryOutputPropertyReply};
use x11rb::protocol::xproto::{Atom, AtomEnum};

use crate::consts::*;

/// Native hardware brightness, in the units of the output's [`PropertyRange`].
pub type BacklightValue = i32;

/// Valid values of a ranged property, both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyRange {
    pub min: BacklightValue,
    pub max: BacklightValue,
}

/// Value of an output property as returned by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawProperty {
    pub type_: Atom,
    pub format: u8,
    pub num_items: u32,
    pub data: Vec<u8>,
}

impl RawProperty {
    /// Build the property a client would write for `value`.
    pub fn from_integer(value: BacklightValue) -> Self {
        Self {
            type_: AtomEnum::INTEGER.into(),
            format: PROPERTY_FORMAT,
            num_items: 1,
            data: value.to_ne_bytes().to_vec(),
        }
    }

    /// The value, if the property holds exactly one 32 bit `INTEGER`.
    pub fn integer(&self) -> Option<BacklightValue> {
        if self.type_ != Atom::from(AtomEnum::INTEGER)
            || self.format != PROPERTY_FORMAT
            || self.num_items != 1
        {
            return None;
        }
        // x11rb negotiates the client's byte order during setup
        let bytes: [u8; 4] = self.data.get(..4)?.try_into().ok()?;
        Some(BacklightValue::from_ne_bytes(bytes))
    }
}

impl From<GetOutputPropertyReply> for RawProperty {
    fn from(reply: GetOutputPropertyReply) -> Self {
        Self {
            type_: reply.type_,
            format: reply.format,
            num_items: reply.num_items,
            data: reply.data,
        }
    }
}

/// Metadata of an output property.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyInfo {
    pub range: bool,
    pub valid_values: Vec<i32>,
}

impl PropertyInfo {
    /// `[min, max]` when the property is declared as a two-value range.
    pub fn bounds(&self) -> Option<PropertyRange> {
        match (self.range, self.valid_values.as_slice()) {
            (true, &[min, max]) => Some(PropertyRange { min, max }),
            _ => None,
        }
    }
}

impl From<QueryOutputPropertyReply> for PropertyInfo {
    fn from(reply: QueryOutputPropertyReply) -> Self {
        Self {
            range: reply.range,
            valid_values: reply.valid_values,
        }
    }
}
