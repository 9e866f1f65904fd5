//! Derive macros for `cassette`'s record receiver traits.
//!
//! See `cassette::avec::FromRecord` and `cassette::avec::FromRecords` for
//! the attributes each macro accepts.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod from_record;
mod from_records;

/// Implement `FromRecord`, converting field values into struct fields
/// annotated with `#[field(N)]` or `#[field(time)]`.
#[proc_macro_derive(FromRecord, attributes(field))]
pub fn derive_from_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    from_record::expand_from_record(&input).unwrap_or_else(|err| err.to_compile_error().into())
}

/// Implement `FromRecords`, collecting records into struct fields annotated
/// with `#[record(N)]`.
#[proc_macro_derive(FromRecords, attributes(record))]
pub fn derive_from_records(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    from_records::expand_from_records(&input).unwrap_or_else(|err| err.to_compile_error().into())
}
