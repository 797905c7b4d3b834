//! Catalog document model.
//!
//! This file is the generator's input: running `setroot` from the crate root
//! regenerates `set_root_gen.rs` from the declarations below. Structs opt in
//! with the `+rooted` marker as their first doc line.

use std::collections::BTreeMap;
use std::rc::Rc;

/// Shared top-level context every document node links back to.
#[derive(Debug, Default)]
pub struct Root {
    pub source: String,
}

///+rooted
#[derive(Debug, Default)]
pub struct Catalog {
    pub root: Option<Rc<Root>>,
    pub info: Option<Box<Info>>,
    pub products: Vec<Box<Product>>,
    pub sections: BTreeMap<String, Box<Section>>,
    pub bundles: BTreeMap<String, Vec<Box<Product>>>,
    pub tags: Vec<String>,
}

///+rooted
#[derive(Debug, Default)]
pub struct Info {
    pub root: Option<Rc<Root>>,
    pub title: String,
    pub revision: u32,
}

///+rooted
#[derive(Debug, Default)]
pub struct Product {
    pub root: Option<Rc<Root>>,
    pub name: String,
    pub detail: Option<Box<Detail>>,
}

///+rooted
#[derive(Debug, Default)]
pub struct Section {
    pub root: Option<Rc<Root>>,
    pub heading: String,
    pub products: Vec<Box<Product>>,
}

///+rooted
#[derive(Debug, Default)]
pub struct Detail {
    pub root: Option<Rc<Root>>,
    pub blurb: String,
}
