use syn::{GenericArgument, PathArguments, PathSegment, Type};

///
/// Shape
///
/// Closed classification of a field's declared type form. Every field maps
/// to exactly one variant and the emitter matches exhaustively, so adding a
/// variant forces a compile-time decision rather than a silent runtime skip.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shape {
    /// Bare named type or boxed trait object; owns no child structs.
    Opaque,
    /// `Option<P<T>>` for an owning pointer `P` (`Box`, `Rc`, `Arc`).
    OwnedRef,
    /// `Vec<T>` with an opaque element.
    OpaqueSeq,
    /// `Vec<P<T>>`.
    OwnedRefSeq,
    /// Map with an opaque value.
    OpaqueMap,
    /// Map with a `P<T>` value.
    OwnedRefMap,
    /// Map with a `Vec<P<T>>` value.
    OwnedRefSeqMap,
    /// Anything else; skipped with a diagnostic.
    Unknown,
}

/// Owning pointer wrappers accepted around a child struct.
const OWNING_PTRS: &[&str] = &["Box", "Rc", "Arc"];

/// Mapping containers classified by their value type.
const MAP_TYPES: &[&str] = &["BTreeMap", "HashMap"];

/// Classify a declared field type.
///
/// Pure and total: unrecognized forms come back as [`Shape::Unknown`] rather
/// than an error. Classification is structural only; whether the surrounding
/// model actually compiles is not this function's business.
#[must_use]
pub fn classify(ty: &Type) -> Shape {
    if is_boxed_trait_object(ty) {
        return Shape::Opaque;
    }

    let Some(seg) = last_segment(ty) else {
        return Shape::Unknown;
    };

    if matches!(seg.arguments, PathArguments::None) {
        return Shape::Opaque;
    }

    let args = type_args(seg);

    if seg.ident == "Option" {
        return match args.as_slice() {
            [inner] if is_owning_ptr(inner) => Shape::OwnedRef,
            _ => Shape::Unknown,
        };
    }

    if seg.ident == "Vec" {
        return match args.as_slice() {
            [elem] if is_owning_ptr(elem) => Shape::OwnedRefSeq,
            [elem] if is_opaque(elem) => Shape::OpaqueSeq,
            _ => Shape::Unknown,
        };
    }

    if MAP_TYPES.iter().any(|map| seg.ident == map) {
        return match args.as_slice() {
            [_, value] if is_owning_ptr(value) => Shape::OwnedRefMap,
            [_, value] if is_ptr_seq(value) => Shape::OwnedRefSeqMap,
            [_, value] if is_opaque(value) => Shape::OpaqueMap,
            _ => Shape::Unknown,
        };
    }

    Shape::Unknown
}

// Final path segment of a plain (non-qualified) type path.
fn last_segment(ty: &Type) -> Option<&PathSegment> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path.path.segments.last(),
        _ => None,
    }
}

fn type_args(seg: &PathSegment) -> Vec<&Type> {
    match &seg.arguments {
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

// Bare named types and boxed trait objects carry no propagation targets.
fn is_opaque(ty: &Type) -> bool {
    if is_boxed_trait_object(ty) {
        return true;
    }

    last_segment(ty).is_some_and(|seg| matches!(seg.arguments, PathArguments::None))
}

fn is_boxed_trait_object(ty: &Type) -> bool {
    let Some(seg) = last_segment(ty) else {
        return false;
    };

    seg.ident == "Box" && matches!(type_args(seg).as_slice(), [Type::TraitObject(_)])
}

// `P<T>` where `P` is an owning pointer and `T` a bare type path.
fn is_owning_ptr(ty: &Type) -> bool {
    let Some(seg) = last_segment(ty) else {
        return false;
    };

    if !OWNING_PTRS.iter().any(|ptr| seg.ident == ptr) {
        return false;
    }

    match type_args(seg).as_slice() {
        [inner] => last_segment(inner).is_some_and(|s| matches!(s.arguments, PathArguments::None)),
        _ => false,
    }
}

// `Vec<P<T>>`.
fn is_ptr_seq(ty: &Type) -> bool {
    let Some(seg) = last_segment(ty) else {
        return false;
    };

    seg.ident == "Vec" && matches!(type_args(seg).as_slice(), [elem] if is_owning_ptr(elem))
}

///
/// TESTS
///
