//! An encoder and decoder for Garmin's Flexible and Interoperable Data
//! Transfer protocol.
//!
//! Cassette decodes documents into an inspectable [`FitFile`], resolving
//! field values against a schema catalog, and encodes them back to bytes.
//! Records can also be synthesized from field names with a
//! [`Builder`](avec::builder::Builder).
//!
//! Most users should begin with the functions and derive macros in the [`avec`]
//! module. The [`sans`] module exposes the underlying wire layouts.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable derive macros (default).
//! - `profile`: enable the built-in catalog, [`profile::PROFILE`] (default).

pub mod avec;
pub mod profile;
pub mod sans;
pub mod value;

pub use avec::{Error, ErrorKind, FitFile, Record};
pub use value::{EnumValue, FromValue, Timestamp, Value};
