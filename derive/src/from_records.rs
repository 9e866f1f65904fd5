use std::collections::HashSet;

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Field, Fields, Ident, LitInt, Result, Type,
    parse::{Parse, ParseStream},
};

pub(crate) fn expand_from_records(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`FromRecords` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`FromRecords` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(RecordField::parse)
        .filter_map(Result::transpose) // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    let mut numbers = HashSet::new();
    for field in &fields {
        if !numbers.insert(field.number.base10_parse::<u16>()?) {
            Err(Error::new(
                field.number.span(),
                "Message numbers must be unique.",
            ))?
        }
    }

    let cases = fields.iter().map(|field| {
        let RecordField {
            name,
            number,
            collection,
        } = field;

        let receiver = match collection {
            Collection::Vec => quote! {
                self.#name.push(::core::default::Default::default());
                self.#name.last_mut().map(|r| r as &mut dyn ::cassette::avec::FromRecord)
            },
            Collection::Option => quote! {
                Some(self.#name.insert(::core::default::Default::default()))
            },
        };

        quote! { #number => { #receiver } }
    });

    let name = &input.ident;

    let expanded = quote! {
        impl ::cassette::avec::FromRecords for #name {
            fn add_record(&mut self, id: u16) -> Option<&mut dyn ::cassette::avec::FromRecord> {
                match id {
                    #(#cases)*
                    _ => None,
                }
            }
        }
    };

    Ok(expanded.into())
}

enum Collection {
    Option,
    Vec,
}

struct RecordField {
    name: Ident,
    number: LitInt,
    collection: Collection,
}

impl RecordField {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("record")) else {
            return Ok(None);
        };

        let Some(name) = field.ident.clone() else {
            Err(Error::new_spanned(field, "Field must be named."))?
        };

        let RecordAttribute { number } = attr.meta.require_list()?.parse_args()?;

        let Type::Path(path) = &field.ty else {
            Err(Error::new_spanned(
                &field.ty,
                "Field must have an `Option<T>` or `Vec<T>` type.",
            ))?
        };

        let Some(segment) = path.path.segments.last() else {
            Err(Error::new_spanned(
                &path.path.segments,
                "Field must have an `Option<T>` or `Vec<T>` type.",
            ))?
        };

        let collection = if segment.ident == "Option" {
            Collection::Option
        } else if segment.ident == "Vec" {
            Collection::Vec
        } else {
            Err(Error::new_spanned(
                &segment.ident,
                "Field must have an `Option<T>` or `Vec<T>` type.",
            ))?
        };

        Ok(Some(Self {
            name,
            number,
            collection,
        }))
    }
}

struct RecordAttribute {
    number: LitInt,
}

impl Parse for RecordAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let number = input.parse::<LitInt>()?;
        Ok(Self { number })
    }
}
