//! Fixture surface for the setroot generator: a small catalog document tree
//! in the generator's input dialect, plus its generated propagation module.
//! Compiling this crate proves the generated contract holds together; the
//! tests prove the propagation actually wires every node back to the root.

pub mod model;
pub mod set_root_gen;

///
/// TESTS
///
