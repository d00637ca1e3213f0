use crate::core::io::traits::StructureFile;
use crate::core::models::{Atom, Element, StructureBuilder, StructureModel};
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Line is too short for ATOM/HETATM record (must be at least 54 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Reader for PDB-format structure files.
///
/// Parses ATOM and HETATM fixed-column records grouped by MODEL blocks. For
/// alternate locations, only the first conformer (blank or 'A') is kept, so
/// every residue contributes one coordinate per atom name. Records other than
/// ATOM/HETATM/MODEL/END are ignored; residue filtering is not done here but at
/// extraction time.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<StructureModel, Self::Error> {
        let mut builder = StructureBuilder::new();
        let mut atom_count: usize = 0;
        let mut seen_first_model = false;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let record_type = slice_and_trim(&line, 0, 6);

            match record_type {
                "ATOM" | "HETATM" => {
                    if line.len() < 54 {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::LineTooShort,
                        });
                    }

                    let alt_loc = line.as_bytes().get(16).copied().unwrap_or(b' ') as char;
                    if alt_loc != ' ' && alt_loc != 'A' {
                        continue;
                    }

                    let serial_str = slice_and_trim(&line, 6, 11);
                    let name_str = slice_and_trim(&line, 12, 16);
                    let res_name_str = slice_and_trim(&line, 17, 20);
                    let chain_id_str = slice_and_trim(&line, 21, 22);
                    let res_seq_str = slice_and_trim(&line, 22, 26);
                    let icode = match line.as_bytes().get(26).copied().unwrap_or(b' ') as char {
                        ' ' => None,
                        c => Some(c),
                    };
                    let x_str = slice_and_trim(&line, 30, 38);
                    let y_str = slice_and_trim(&line, 38, 46);
                    let z_str = slice_and_trim(&line, 46, 54);
                    let element_str = slice_and_trim(&line, 76, 78);

                    let serial: usize = serial_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidInt {
                            columns: "7-11".into(),
                            value: serial_str.into(),
                        },
                    })?;
                    let res_seq: isize = res_seq_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidInt {
                            columns: "23-26".into(),
                            value: res_seq_str.into(),
                        },
                    })?;
                    let parse_coord = |s: &str, columns: &str| -> Result<f64, PdbError> {
                        s.parse().map_err(|_| PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::InvalidFloat {
                                columns: columns.into(),
                                value: s.into(),
                            },
                        })
                    };
                    let x = parse_coord(x_str, "31-38")?;
                    let y = parse_coord(y_str, "39-46")?;
                    let z = parse_coord(z_str, "47-54")?;

                    let element = if element_str.is_empty() {
                        Element::infer_from_atom_name(name_str)
                    } else {
                        Element::from_symbol(element_str)
                    };

                    // Blank chain id still forms a chain, matching file order.
                    let chain_id = if chain_id_str.is_empty() {
                        " "
                    } else {
                        chain_id_str
                    };
                    builder.start_chain(chain_id);
                    builder.start_residue(res_seq, icode, res_name_str);
                    builder.add_atom(Atom::new(serial, name_str, element, Point3::new(x, y, z)));
                    atom_count += 1;
                }
                "MODEL" => {
                    // The first MODEL record opens the scope implicitly filled
                    // by headerless files; only later ones start a new scope.
                    if seen_first_model || atom_count > 0 {
                        builder.start_model();
                    }
                    seen_first_model = true;
                }
                "END" => break,
                _ => {}
            }
        }

        if atom_count == 0 {
            return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn atom_line(
        record: &str,
        serial: usize,
        name: &str,
        res_name: &str,
        chain: char,
        res_seq: isize,
        x: f64,
        y: f64,
        z: f64,
    ) -> String {
        format!(
            "{:<6}{:>5} {:<4}{}{:>3} {}{:>4}{}   {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}",
            record, serial, name, " ", res_name, chain, res_seq, " ", x, y, z, 1.00, 0.00, ""
        )
    }

    fn read(content: &str) -> Result<StructureModel, PdbError> {
        PdbFile::read_from(&mut Cursor::new(content.as_bytes()))
    }

    #[test]
    fn parses_atoms_into_chains_and_residues() {
        let content = [
            atom_line("ATOM", 1, "N", "MET", 'A', 1, 1.0, 2.0, 3.0),
            atom_line("ATOM", 2, "CA", "MET", 'A', 1, 2.0, 2.0, 3.0),
            atom_line("ATOM", 3, "CA", "ALA", 'A', 2, 3.0, 2.0, 3.0),
            atom_line("ATOM", 4, "CA", "GLY", 'B', 1, 4.0, 2.0, 3.0),
            "END".to_string(),
        ]
        .join("\n");

        let model = read(&content).unwrap();
        assert_eq!(model.chains().len(), 2);
        assert_eq!(model.chains()[0].id, "A");
        assert_eq!(model.chains()[0].residues().len(), 2);
        assert_eq!(model.chains()[0].residues()[0].atoms().len(), 2);
        let ca = model.chains()[0].residues()[0].ca().unwrap();
        assert_eq!(ca.position, Point3::new(2.0, 2.0, 3.0));
    }

    #[test]
    fn hetatm_records_are_parsed_like_atom_records() {
        let content = [
            atom_line("ATOM", 1, "CA", "ALA", 'A', 1, 0.0, 0.0, 0.0),
            atom_line("HETATM", 2, "SE", "MSE", 'A', 2, 1.0, 0.0, 0.0),
            "END".to_string(),
        ]
        .join("\n");

        let model = read(&content).unwrap();
        assert_eq!(model.chains()[0].residues().len(), 2);
        assert_eq!(model.chains()[0].residues()[1].name, "MSE");
    }

    #[test]
    fn multi_model_files_keep_all_models_in_file_order() {
        let content = [
            "MODEL        1".to_string(),
            atom_line("ATOM", 1, "CA", "ALA", 'A', 1, 0.0, 0.0, 0.0),
            "ENDMDL".to_string(),
            "MODEL        2".to_string(),
            atom_line("ATOM", 1, "CA", "ALA", 'A', 1, 5.0, 0.0, 0.0),
            "ENDMDL".to_string(),
            "END".to_string(),
        ]
        .join("\n");

        let model = read(&content).unwrap();
        assert_eq!(model.chains().len(), 2);
        assert_eq!(model.atom_count(), 2);
    }

    #[test]
    fn secondary_alternate_locations_are_skipped() {
        let mut line_a = atom_line("ATOM", 1, "CA", "ALA", 'A', 1, 0.0, 0.0, 0.0);
        let mut line_b = atom_line("ATOM", 2, "CA", "ALA", 'A', 1, 1.0, 0.0, 0.0);
        line_a.replace_range(16..17, "A");
        line_b.replace_range(16..17, "B");
        let content = [line_a, line_b, "END".to_string()].join("\n");

        let model = read(&content).unwrap();
        assert_eq!(model.chains()[0].residues()[0].atoms().len(), 1);
        assert_eq!(
            model.chains()[0].residues()[0].atoms()[0].position,
            Point3::new(0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn short_atom_line_is_a_parse_error() {
        let content = "ATOM      1  CA  ALA A   1\nEND";
        let err = read(content).unwrap_err();
        assert!(matches!(
            err,
            PdbError::Parse {
                kind: PdbParseErrorKind::LineTooShort,
                ..
            }
        ));
    }

    #[test]
    fn invalid_coordinate_is_a_parse_error_with_line_number() {
        let mut line = atom_line("ATOM", 1, "CA", "ALA", 'A', 1, 0.0, 0.0, 0.0);
        line.replace_range(30..38, "  badnum");
        let err = read(&line).unwrap_err();
        match err {
            PdbError::Parse { line, kind } => {
                assert_eq!(line, 1);
                assert!(matches!(kind, PdbParseErrorKind::InvalidFloat { .. }));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn file_without_atoms_is_rejected() {
        let err = read("HEADER    TEST\nEND").unwrap_err();
        assert!(matches!(err, PdbError::MissingRecord(_)));
    }

    #[test]
    fn read_from_path_reads_files_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mini.pdb");
        let content = [
            atom_line("ATOM", 1, "CA", "ALA", 'A', 1, 0.0, 0.0, 0.0),
            "END".to_string(),
        ]
        .join("\n");
        std::fs::write(&path, content).unwrap();

        let model = PdbFile::read_from_path(&path).unwrap();
        assert_eq!(model.atom_count(), 1);
    }

    #[test]
    fn insertion_codes_are_attached_to_residue_numbers() {
        let line_a = atom_line("ATOM", 1, "CA", "SER", 'A', 100, 0.0, 0.0, 0.0);
        let mut line_b = atom_line("ATOM", 2, "CA", "THR", 'A', 100, 1.0, 0.0, 0.0);
        line_b.replace_range(26..27, "A");
        let content = [line_a, line_b, "END".to_string()].join("\n");

        let model = read(&content).unwrap();
        let residues = model.chains()[0].residues();
        assert_eq!(residues.len(), 2);
        assert_eq!(residues[1].number(), "100A");
    }
}
