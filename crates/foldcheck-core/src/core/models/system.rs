use super::atom::Atom;
use super::chain::Chain;
use super::residue::Residue;
use std::collections::HashMap;

/// A parsed structure: ordered chains across all models of the source file.
///
/// Read-only after construction. Chains appear in file order; a chain
/// identifier reused in a later MODEL block yields a distinct `Chain` entry, so
/// traversal reproduces the file exactly (model, then chain, then residue, then
/// atom).
#[derive(Debug, Clone, Default)]
pub struct StructureModel {
    chains: Vec<Chain>,
}

impl StructureModel {
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Total number of atoms across all chains and residues.
    pub fn atom_count(&self) -> usize {
        self.chains
            .iter()
            .flat_map(|c| c.residues())
            .map(|r| r.atoms().len())
            .sum()
    }
}

/// Incrementally assembles a [`StructureModel`] while a reader walks the file.
///
/// Mirrors the file's own grouping: `start_model` opens a new model scope,
/// `start_chain` / `start_residue` are idempotent within the current scope, and
/// `add_atom` appends to the current residue.
pub struct StructureBuilder {
    model: StructureModel,
    current_model: usize,
    chain_map: HashMap<(usize, String), usize>,
    residue_map: HashMap<(usize, isize, Option<char>), usize>,
    current_chain_idx: Option<usize>,
    current_residue_idx: Option<usize>,
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self {
            model: StructureModel::default(),
            current_model: 0,
            chain_map: HashMap::new(),
            residue_map: HashMap::new(),
            current_chain_idx: None,
            current_residue_idx: None,
        }
    }

    /// Opens a new model scope; subsequent chains are distinct from any chain
    /// of a previous model, even under the same identifier.
    pub fn start_model(&mut self) -> &mut Self {
        self.current_model += 1;
        self.current_chain_idx = None;
        self.current_residue_idx = None;
        self
    }

    pub fn start_chain(&mut self, id: &str) -> &mut Self {
        let key = (self.current_model, id.to_string());
        let idx = *self.chain_map.entry(key).or_insert_with(|| {
            let index = self.model.chains.len();
            self.model.chains.push(Chain::new(id));
            index
        });
        if self.current_chain_idx != Some(idx) {
            self.current_residue_idx = None;
        }
        self.current_chain_idx = Some(idx);
        self
    }

    pub fn start_residue(&mut self, seq: isize, icode: Option<char>, name: &str) -> &mut Self {
        let chain_idx = self
            .current_chain_idx
            .expect("start_chain must precede start_residue");
        let chain = &mut self.model.chains[chain_idx];
        let key = (chain_idx, seq, icode);
        let res_idx = *self.residue_map.entry(key).or_insert_with(|| {
            let index = chain.residues().len();
            chain.add_residue(Residue::new(seq, icode, name));
            index
        });
        self.current_residue_idx = Some(res_idx);
        self
    }

    pub fn add_atom(&mut self, atom: Atom) -> &mut Self {
        let chain_idx = self
            .current_chain_idx
            .expect("start_chain must precede add_atom");
        let res_idx = self
            .current_residue_idx
            .expect("start_residue must precede add_atom");
        self.model.chains[chain_idx]
            .residue_mut(res_idx)
            .expect("current residue index is always valid")
            .add_atom(atom);
        self
    }

    pub fn build(self) -> StructureModel {
        self.model
    }
}
