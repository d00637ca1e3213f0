use super::atom::Atom;
use crate::core::ids::ResidueId;
use crate::core::residues::is_standard_amino_acid;

/// A residue: a named, numbered group of atoms within a chain.
///
/// Atoms are kept in file order. A residue either classifies as a standard
/// amino acid or is excluded from every core computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    /// Residue sequence number from the source file.
    pub seq: isize,
    /// PDB insertion code, if any.
    pub icode: Option<char>,
    /// Three-letter residue name (e.g. "ALA").
    pub name: String,
    atoms: Vec<Atom>,
}

impl Residue {
    pub fn new(seq: isize, icode: Option<char>, name: &str) -> Self {
        Self {
            seq,
            icode,
            name: name.trim().to_string(),
            atoms: Vec::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn is_standard_amino_acid(&self) -> bool {
        is_standard_amino_acid(&self.name)
    }

    /// The alpha-carbon atom, if present.
    pub fn ca(&self) -> Option<&Atom> {
        self.atoms.iter().find(|a| a.is_ca())
    }

    /// Sequence number with any insertion code appended (e.g. "100A").
    pub fn number(&self) -> String {
        match self.icode {
            Some(code) => format!("{}{}", self.seq, code),
            None => self.seq.to_string(),
        }
    }

    /// Canonical residue identity within the given chain.
    pub fn id_in_chain(&self, chain_id: &str) -> ResidueId {
        ResidueId::new(chain_id, &self.name, &self.number())
    }
}
