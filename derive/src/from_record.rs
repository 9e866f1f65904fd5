use std::collections::HashMap;

use proc_macro::TokenStream;
use quote::{ToTokens, quote};
use syn::{
    Data, DeriveInput, Error, ExprClosure, Field, Fields, GenericArgument, Ident, LitInt, Pat,
    PathArguments, Result, Token, Type,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

pub(crate) fn expand_from_record(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new(
            input.span(),
            "`FromRecord` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new(
            input.span(),
            "`FromRecord` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .filter_map(Result::transpose) // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    let mut cases = HashMap::new();
    let mut time_case = None;

    for field in &fields {
        match &field.identifier {
            FieldIdentifier::Number(number) => {
                let assignment = field.assignment(quote! { value });
                let case = quote! { #number => { #assignment } };

                if cases.insert(number.base10_digits().to_owned(), case).is_some() {
                    Err(Error::new(
                        number.span(),
                        "Field identifiers must be unique.",
                    ))?
                }
            }
            FieldIdentifier::Time(ident) => {
                let assignment =
                    field.assignment(quote! { &::cassette::Value::Timestamp(timestamp) });

                if time_case.replace(assignment).is_some() {
                    Err(Error::new_spanned(ident, "Field identifiers must be unique."))?
                }
            }
        }
    }

    let cases = cases.into_values();

    let time_method = time_case.map(|assignment| {
        quote! {
            fn add_timestamp(&mut self, timestamp: ::cassette::Timestamp) {
                #assignment
            }
        }
    });

    let name = &input.ident;

    let expanded = quote! {
        impl ::cassette::avec::FromRecord for #name {
            fn add_value(&mut self, field: u8, value: &::cassette::Value) {
                match field {
                    #(#cases)*
                    _ => {}
                }
            }

            #time_method
        }
    };

    Ok(expanded.into())
}

struct FieldMetadata {
    name: Ident,
    /// The type converted to with `FromValue`.
    target: Type,
    identifier: FieldIdentifier,
    handler: Option<(Type, ExprClosure)>,
}

enum FieldIdentifier {
    Number(LitInt),
    Time(Ident),
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            return Ok(None);
        };

        let Some(name) = field.ident.clone() else {
            Err(Error::new_spanned(field, "Field must be named."))?
        };

        let FieldAttribute {
            identifier,
            handler,
        } = attr.meta.require_list()?.parse_args()?;

        let target = match &handler {
            Some(handler) => closure_value_type(handler)?,
            None => option_inner_type(&field.ty)?,
        };

        let handler = handler.map(|h| (field.ty.clone(), h));

        Ok(Some(Self {
            name,
            target,
            identifier,
            handler,
        }))
    }

    /// Convert `value`, an expression of type `&Value`, and store it.
    fn assignment(&self, value: impl ToTokens) -> impl ToTokens {
        let Self {
            name,
            target,
            handler,
            ..
        } = self;

        let store = match handler {
            Some((field_type, handler)) => {
                let acc = &handler.inputs[0];
                let val = &handler.inputs[1];
                let body = &handler.body;

                quote! {
                    (|#acc: &mut #field_type, #val| { #body })(&mut self.#name, converted)
                }
            }
            None => quote! { self.#name = Some(converted) },
        };

        quote! {
            if let Some(converted) = <#target as ::cassette::FromValue>::from_value(#value) {
                #store;
            }
        }
    }
}

/// The annotated type of a handler closure's second parameter.
fn closure_value_type(handler: &ExprClosure) -> Result<Type> {
    if handler.inputs.len() != 2 {
        Err(Error::new_spanned(
            handler,
            "Handler closure must have two parameters.",
        ))?
    }

    let parameter = &handler.inputs[1];
    let Pat::Type(pat_type) = parameter else {
        Err(Error::new_spanned(
            parameter,
            "Handler closure's second parameter must be annotated with the expected value type.",
        ))?
    };

    Ok((*pat_type.ty).clone())
}

/// The `T` of a field of type `Option<T>`.
fn option_inner_type(ty: &Type) -> Result<Type> {
    let Type::Path(path) = ty else {
        Err(Error::new_spanned(ty, "Field must have type `Option<T>`."))?
    };

    let Some(segment) = path.path.segments.last() else {
        Err(Error::new_spanned(ty, "Field must have type `Option<T>`."))?
    };

    if segment.ident != "Option" {
        Err(Error::new_spanned(
            &segment.ident,
            "Field without a handler must have type `Option<T>`.",
        ))?
    }

    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        Err(Error::new_spanned(
            &segment.arguments,
            "Field of type `Option<T>` must have a generic parameter.",
        ))?
    };

    let Some(GenericArgument::Type(inner_type)) = arguments.args.first() else {
        Err(Error::new_spanned(
            &arguments.args,
            "Generic argument of a field of type `Option<T>` must be a type.",
        ))?
    };

    Ok(inner_type.clone())
}

struct FieldAttribute {
    identifier: FieldIdentifier,
    handler: Option<ExprClosure>,
}

impl Parse for FieldAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let identifier = if input.peek(Ident) {
            let ident = input.parse::<Ident>()?;

            if ident != "time" {
                Err(Error::new_spanned(
                    &ident,
                    "Field identifier must be an integer literal or `time`.",
                ))?
            }

            FieldIdentifier::Time(ident)
        } else {
            FieldIdentifier::Number(input.parse::<LitInt>()?)
        };

        let handler = if !input.is_empty() {
            input.parse::<Token![,]>()?;
            Some(input.parse::<ExprClosure>()?)
        } else {
            None
        };

        Ok(Self {
            identifier,
            handler,
        })
    }
}
