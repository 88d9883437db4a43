//! Transport layer: HTTP and wire-format details (serialization/deserialization).

pub(crate) mod datetime;
mod descriptor;
mod envelope;
pub(crate) mod fields;

pub(crate) use descriptor::{Method, RequestDescriptor};
pub(crate) use envelope::normalize_body;
