use crate::{MARKER, METHOD};
use syn::{Attribute, Expr, ExprLit, Fields, Ident, Item, Lit, Meta, Type};
use thiserror::Error as ThisError;
use tracing::info;

///
/// ParseError
///

#[derive(Debug, ThisError)]
pub enum ParseError {
    #[error("invalid model source: {0}")]
    InvalidSource(#[from] syn::Error),
}

///
/// RootedStruct
///
/// A struct declaration selected for generation. Declaration order in the
/// input is preserved and determines emission order.
///

#[derive(Clone, Debug)]
pub struct RootedStruct {
    pub ident: Ident,
    pub fields: Vec<ModelField>,
}

///
/// ModelField
///

#[derive(Clone, Debug)]
pub struct ModelField {
    pub ident: Ident,
    pub ty: Type,
}

/// Parse model source and select the declarations opted in via the marker.
///
/// Non-annotated type declarations are skipped with a diagnostic. A marker
/// on anything other than a struct with named fields selects nothing and is
/// ignored. Malformed source is fatal; there is no best-effort output.
pub fn parse_model(src: &str) -> Result<Vec<RootedStruct>, ParseError> {
    let file = syn::parse_file(src)?;
    let mut structs = Vec::new();

    for item in &file.items {
        let (ident, attrs) = match item {
            Item::Struct(item) => (&item.ident, &item.attrs),
            Item::Enum(item) => (&item.ident, &item.attrs),
            Item::Type(item) => (&item.ident, &item.attrs),
            Item::Union(item) => (&item.ident, &item.attrs),
            _ => continue,
        };

        if !has_marker(attrs) {
            info!("{ident} is not a rooted object. skip.");
            continue;
        }

        // Marker on a non-struct declaration selects nothing.
        let Item::Struct(item) = item else {
            continue;
        };
        let Fields::Named(named) = &item.fields else {
            continue;
        };

        info!("generate {ident}.{METHOD}()");

        let fields = named
            .named
            .iter()
            .filter_map(|field| {
                let ident = field.ident.clone()?;

                Some(ModelField {
                    ident,
                    ty: field.ty.clone(),
                })
            })
            .collect();

        structs.push(RootedStruct {
            ident: item.ident.clone(),
            fields,
        });
    }

    Ok(structs)
}

// Exact match on the first doc line, mirroring the opt-in contract: the
// marker must be the first line of the declaration's doc block.
fn has_marker(attrs: &[Attribute]) -> bool {
    first_doc_line(attrs).is_some_and(|line| line == MARKER)
}

fn first_doc_line(attrs: &[Attribute]) -> Option<String> {
    attrs.iter().find_map(|attr| {
        if !attr.path().is_ident("doc") {
            return None;
        }
        let Meta::NameValue(meta) = &attr.meta else {
            return None;
        };
        let Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) = &meta.value
        else {
            return None;
        };

        Some(lit.value())
    })
}

///
/// TESTS
///
