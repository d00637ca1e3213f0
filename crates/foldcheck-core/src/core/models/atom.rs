use nalgebra::Point3;

/// Chemical element of an atom, restricted to what protein structure files
/// actually contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    H,
    C,
    N,
    O,
    P,
    S,
    Se,
    F,
    Cl,
    Br,
    I,
    Na,
    K,
    Mg,
    Ca,
    Mn,
    Fe,
    Zn,
    Cu,
    Ni,
    Co,
    /// Unrecognized or absent element symbol.
    Unknown,
}

impl Element {
    /// Parses an element symbol as found in PDB columns 77-78.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol.trim().to_ascii_uppercase().as_str() {
            "H" | "D" | "T" => Self::H,
            "C" => Self::C,
            "N" => Self::N,
            "O" => Self::O,
            "P" => Self::P,
            "S" => Self::S,
            "SE" => Self::Se,
            "F" => Self::F,
            "CL" => Self::Cl,
            "BR" => Self::Br,
            "I" => Self::I,
            "NA" => Self::Na,
            "K" => Self::K,
            "MG" => Self::Mg,
            "CA" => Self::Ca,
            "MN" => Self::Mn,
            "FE" => Self::Fe,
            "ZN" => Self::Zn,
            "CU" => Self::Cu,
            "NI" => Self::Ni,
            "CO" => Self::Co,
            _ => Self::Unknown,
        }
    }

    /// Falls back to the first letter of the atom name when the element column
    /// is blank (common in predicted-structure exports).
    pub fn infer_from_atom_name(name: &str) -> Self {
        let first = name.trim_start_matches(|c: char| c.is_ascii_digit()).chars().next();
        match first.map(|c| c.to_ascii_uppercase()) {
            Some('H') => Self::H,
            Some('C') => Self::C,
            Some('N') => Self::N,
            Some('O') => Self::O,
            Some('P') => Self::P,
            Some('S') => Self::S,
            _ => Self::Unknown,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::H => "H",
            Self::C => "C",
            Self::N => "N",
            Self::O => "O",
            Self::P => "P",
            Self::S => "S",
            Self::Se => "Se",
            Self::F => "F",
            Self::Cl => "Cl",
            Self::Br => "Br",
            Self::I => "I",
            Self::Na => "Na",
            Self::K => "K",
            Self::Mg => "Mg",
            Self::Ca => "Ca",
            Self::Mn => "Mn",
            Self::Fe => "Fe",
            Self::Zn => "Zn",
            Self::Cu => "Cu",
            Self::Ni => "Ni",
            Self::Co => "Co",
            Self::Unknown => "X",
        }
    }
}

/// An atom record as parsed from a structure file. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Serial number from the source file.
    pub serial: usize,
    /// Atom name (e.g. "CA", "N", "OXT").
    pub name: String,
    /// Chemical element.
    pub element: Element,
    /// 3D coordinates in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    pub fn new(serial: usize, name: &str, element: Element, position: Point3<f64>) -> Self {
        Self {
            serial,
            name: name.trim().to_string(),
            element,
            position,
        }
    }

    /// Whether this is the alpha-carbon backbone atom.
    pub fn is_ca(&self) -> bool {
        self.name == "CA" && self.element != Element::Ca
    }
}
