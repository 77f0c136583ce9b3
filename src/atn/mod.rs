mod bytes;
mod codec;
mod error;
mod file;
mod tag;
mod value;

/// Byte cursor and big-endian writer primitives.
pub use bytes::{Cursor, Writer};
/// Descriptor encode/decode entry points.
pub use codec::{decode_descriptor_at, encode_descriptor};
/// Error and result aliases.
pub use error::{AtnError, Result};
/// Action file container types and host boundary.
pub use file::{Action, ActionFile, ActionSet, ActionStep, HostBridge};
/// Type tag registry and label helpers.
pub use tag::{NULL_TAG, RefForm, Tag, ValueKind, reference_form, reference_tag, render_tag, value_kind, value_tag};
/// Descriptor value model types and construction helper.
pub use value::{ActionList, Descriptor, Reference, ReferenceStep, TypedValue, build_descriptor};
