pub mod atom;
pub mod chain;
pub mod residue;
pub mod system;

pub use atom::{Atom, Element};
pub use chain::Chain;
pub use residue::Residue;
pub use system::{StructureBuilder, StructureModel};
