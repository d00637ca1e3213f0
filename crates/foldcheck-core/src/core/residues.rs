use phf::{Set, phf_set};

/// Three-letter codes of residues treated as standard amino acids.
///
/// Covers the twenty canonical residues plus the protonation-state and
/// selenomethionine variants that structure files use for the same chemistry.
/// Everything outside this set (waters, ligands, nucleotides) is excluded from
/// all core computations.
static STANDARD_AMINO_ACIDS: Set<&'static str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS",
    "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO",
    "SER", "THR", "TRP", "TYR", "VAL",
    // Histidine protonation variants
    "HSD", "HSE", "HSP", "HID", "HIE", "HIP",
    // Selenomethionine, deposited as HETATM but part of the polymer
    "MSE",
};

pub fn is_standard_amino_acid(res_name: &str) -> bool {
    STANDARD_AMINO_ACIDS.contains(res_name.trim().to_ascii_uppercase().as_str())
}
