//! Wire-level building blocks without any notion of records or catalogs.
//!
//! This module is intended for applications needing finer control over the
//! byte layout of documents. See [`crate::avec`] for decoders and encoders
//! covering common patterns.
//!
//! # Layout
//!
//! A document is a header ([`header::DocumentHeader`]), a section of records,
//! and a trailing two-byte check value computed by [`check::compute_crc`]
//! over the header and records.
//!
//! Each record begins with a one-byte header ([`header::decode_record_header`]).
//! Definition records describe the layout of a local message number
//! ([`definition`]); data records then carry values laid out accordingly
//! ([`data`]). Compressed timestamp headers carry a five-bit time offset,
//! resolved against a rolling reference ([`time::ReferenceTime`]).

pub mod check;
pub mod data;
pub mod definition;
pub mod header;
pub mod time;
