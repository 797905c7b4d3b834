use crate::{
    METHOD, ROOT_FIELD, ROOT_TYPE,
    parse::{ModelField, RootedStruct},
    shape::{Shape, classify},
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tracing::warn;

/// Doc line stamped onto the generated artifact.
const GENERATED_HEADER: &str = " Code generated by setroot. DO NOT EDIT.";

/// Assemble the full generated module: header, imports, one `impl` block per
/// selected struct in declaration order.
#[must_use]
pub fn module(structs: &[RootedStruct]) -> TokenStream {
    let impls = structs.iter().map(struct_impl);

    quote! {
        #![doc = #GENERATED_HEADER]

        use crate::model::*;
        use std::rc::Rc;

        #(#impls)*
    }
}

/// Emit the `impl` block carrying the propagation method for one struct.
///
/// The method signature is fixed: same name for every struct, one parameter,
/// no return value. Statement order equals field declaration order.
#[must_use]
pub fn struct_impl(item: &RootedStruct) -> TokenStream {
    let ident = &item.ident;
    let method = format_ident!("{METHOD}");
    let root_ty = format_ident!("{ROOT_TYPE}");
    let stmts: Vec<TokenStream> = item.fields.iter().filter_map(field_stmt).collect();

    quote! {
        impl #ident {
            pub fn #method(&mut self, root: &Rc<#root_ty>) {
                #(#stmts)*
            }
        }
    }
}

/// Emit the statement a single field contributes, if any.
///
/// Opaque shapes contribute nothing. Unrecognized shapes are logged and
/// skipped; they never fail the run.
pub fn field_stmt(field: &ModelField) -> Option<TokenStream> {
    let ident = &field.ident;
    let method = format_ident!("{METHOD}");

    match classify(&field.ty) {
        Shape::Opaque | Shape::OpaqueSeq | Shape::OpaqueMap => None,

        Shape::OwnedRef => {
            if field.ident == ROOT_FIELD {
                // Reserved name: the back-reference itself, assigned directly.
                Some(quote! {
                    self.#ident = Some(Rc::clone(root));
                })
            } else {
                Some(quote! {
                    if let Some(child) = self.#ident.as_mut() {
                        child.#method(root);
                    }
                })
            }
        }

        // Owning pointers are non-null; elements need no guard.
        Shape::OwnedRefSeq => Some(quote! {
            for child in self.#ident.iter_mut() {
                child.#method(root);
            }
        }),

        Shape::OwnedRefMap => Some(quote! {
            for child in self.#ident.values_mut() {
                child.#method(root);
            }
        }),

        Shape::OwnedRefSeqMap => Some(quote! {
            for children in self.#ident.values_mut() {
                for child in children.iter_mut() {
                    child.#method(root);
                }
            }
        }),

        Shape::Unknown => {
            warn!("unrecognized shape for field {ident}; no propagation emitted");
            None
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn field(ident: &str, ty: &str) -> ModelField {
        ModelField {
            ident: format_ident!("{ident}"),
            ty: syn::parse_str(ty).expect("test type must parse"),
        }
    }

    fn rooted(ident: &str, fields: Vec<ModelField>) -> RootedStruct {
        RootedStruct {
            ident: format_ident!("{ident}"),
            fields,
        }
    }

    #[test]
    fn owned_ref_is_null_guarded() {
        let stmt = field_stmt(&field("contact", "Option<Box<Contact>>")).expect("statement");

        assert_eq!(
            stmt.to_string(),
            quote! {
                if let Some(child) = self.contact.as_mut() {
                    child.set_root(root);
                }
            }
            .to_string()
        );
    }

    #[test]
    fn reserved_root_field_is_assigned_directly() {
        let stmt = field_stmt(&field("root", "Option<Rc<Root>>")).expect("statement");

        assert_eq!(
            stmt.to_string(),
            quote! {
                self.root = Some(Rc::clone(root));
            }
            .to_string()
        );
    }

    #[test]
    fn sequence_loop_has_no_element_guard() {
        let stmt = field_stmt(&field("items", "Vec<Box<Item>>")).expect("statement");

        assert_eq!(
            stmt.to_string(),
            quote! {
                for child in self.items.iter_mut() {
                    child.set_root(root);
                }
            }
            .to_string()
        );
    }

    #[test]
    fn map_loops_over_values() {
        let stmt = field_stmt(&field("index", "BTreeMap<String, Box<Item>>")).expect("statement");

        assert_eq!(
            stmt.to_string(),
            quote! {
                for child in self.index.values_mut() {
                    child.set_root(root);
                }
            }
            .to_string()
        );
    }

    #[test]
    fn map_of_sequences_nests_the_loops() {
        let stmt =
            field_stmt(&field("groups", "BTreeMap<String, Vec<Box<Item>>>")).expect("statement");

        assert_eq!(
            stmt.to_string(),
            quote! {
                for children in self.groups.values_mut() {
                    for child in children.iter_mut() {
                        child.set_root(root);
                    }
                }
            }
            .to_string()
        );
    }

    #[test]
    fn opaque_and_unknown_fields_contribute_nothing() {
        assert!(field_stmt(&field("label", "String")).is_none());
        assert!(field_stmt(&field("tags", "Vec<String>")).is_none());
        assert!(field_stmt(&field("meta", "BTreeMap<String, Label>")).is_none());
        assert!(field_stmt(&field("odd", "Option<Child>")).is_none());
    }

    #[test]
    fn struct_with_only_opaque_fields_gets_an_empty_body() {
        let tokens = struct_impl(&rooted(
            "Info",
            vec![field("title", "String"), field("version", "u32")],
        ));

        assert_eq!(
            tokens.to_string(),
            quote! {
                impl Info {
                    pub fn set_root(&mut self, root: &Rc<Root>) {}
                }
            }
            .to_string()
        );
    }

    #[test]
    fn statements_follow_field_declaration_order() {
        let tokens = struct_impl(&rooted(
            "Doc",
            vec![
                field("a", "Option<Box<Child>>"),
                field("root", "Option<Rc<Root>>"),
                field("items", "Vec<Box<Item>>"),
                field("tags", "BTreeMap<String, Label>"),
            ],
        ));

        assert_eq!(
            tokens.to_string(),
            quote! {
                impl Doc {
                    pub fn set_root(&mut self, root: &Rc<Root>) {
                        if let Some(child) = self.a.as_mut() {
                            child.set_root(root);
                        }
                        self.root = Some(Rc::clone(root));
                        for child in self.items.iter_mut() {
                            child.set_root(root);
                        }
                    }
                }
            }
            .to_string()
        );
    }

    #[test]
    fn module_emits_header_imports_and_impls_in_order() {
        let tokens = module(&[
            rooted("B", vec![field("root", "Option<Rc<Root>>")]),
            rooted("A", vec![]),
        ]);
        let text = tokens.to_string();

        let impl_b = text.find("impl B").expect("impl B present");
        let impl_a = text.find("impl A").expect("impl A present");
        assert!(impl_b < impl_a);
        assert!(text.contains("DO NOT EDIT"));
        assert!(text.contains("use crate :: model :: * ;"));
    }
}
