use super::residue::Residue;

/// An ordered sequence of residues sharing a chain identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    /// Chain identifier (single character in PDB practice).
    pub id: String,
    residues: Vec<Residue>,
}

impl Chain {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            residues: Vec::new(),
        }
    }

    pub(crate) fn add_residue(&mut self, residue: Residue) {
        self.residues.push(residue);
    }

    pub(crate) fn residue_mut(&mut self, index: usize) -> Option<&mut Residue> {
        self.residues.get_mut(index)
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }
}
