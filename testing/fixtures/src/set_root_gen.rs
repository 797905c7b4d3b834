//! Code generated by setroot. DO NOT EDIT.
use crate::model::*;
use std::rc::Rc;
impl Catalog {
    pub fn set_root(&mut self, root: &Rc<Root>) {
        self.root = Some(Rc::clone(root));
        if let Some(child) = self.info.as_mut() {
            child.set_root(root);
        }
        for child in self.products.iter_mut() {
            child.set_root(root);
        }
        for child in self.sections.values_mut() {
            child.set_root(root);
        }
        for children in self.bundles.values_mut() {
            for child in children.iter_mut() {
                child.set_root(root);
            }
        }
    }
}
impl Info {
    pub fn set_root(&mut self, root: &Rc<Root>) {
        self.root = Some(Rc::clone(root));
    }
}
impl Product {
    pub fn set_root(&mut self, root: &Rc<Root>) {
        self.root = Some(Rc::clone(root));
        if let Some(child) = self.detail.as_mut() {
            child.set_root(root);
        }
    }
}
impl Section {
    pub fn set_root(&mut self, root: &Rc<Root>) {
        self.root = Some(Rc::clone(root));
        for child in self.products.iter_mut() {
            child.set_root(root);
        }
    }
}
impl Detail {
    pub fn set_root(&mut self, root: &Rc<Root>) {
        self.root = Some(Rc::clone(root));
    }
}
