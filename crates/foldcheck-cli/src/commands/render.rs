use crate::cli::RenderArgs;
use crate::error::{CliError, Result};
use std::fs;
use tracing::info;

pub fn run(args: RenderArgs) -> Result<()> {
    let chain1 = validate_chain(&args.chain1)?;
    let chain2 = validate_chain(&args.chain2)?;
    if !(args.interface_distance.is_finite() && args.interface_distance > 0.0) {
        return Err(CliError::Argument(
            "interface distance must be a positive number".to_string(),
        ));
    }

    let script = pymol_script(
        &args.input.display().to_string(),
        chain1,
        chain2,
        args.interface_distance,
    );
    fs::write(&args.output, script)?;
    info!(path = %args.output.display(), "PyMOL script written.");
    println!("Saved {}", args.output.display());

    Ok(())
}

fn validate_chain(chain: &str) -> Result<&str> {
    if chain.is_empty() || chain.chars().any(|c| c.is_whitespace()) {
        return Err(CliError::Argument(format!(
            "'{}' is not a valid chain identifier",
            chain
        )));
    }
    Ok(chain)
}

/// Builds a standalone PyMOL script rendering three views of a two-chain
/// complex: cartoon overview, stick-level interface closeup, and a surface
/// view of the first partner.
///
/// The interface selection is symmetric: residues of either chain within the
/// cutoff of the other chain.
fn pymol_script(pdb_file: &str, chain1: &str, chain2: &str, interface_distance: f64) -> String {
    format!(
        r#"# PyMOL visualization script
# Structure: {pdb_file}

load {pdb_file}, protein

bg_color white
set ray_shadows, 0
set antialias, 2

# View 1: overview
hide everything, protein
show cartoon, protein
color cyan, chain {chain1}
color magenta, chain {chain2}
orient protein
zoom protein, 5
ray 2400, 2400
png overview.png, dpi=300

# View 2: interface closeup
select interface1, chain {chain1} within {interface_distance} of chain {chain2}
select interface2, chain {chain2} within {interface_distance} of chain {chain1}
select interface, interface1 or interface2

# Export the interface residue list alongside the images
stored.residues = []
iterate interface and name CA, stored.residues.append("%s\t%s\t%s" % (chain, resn, resi))
python
with open('interface_residues.txt', 'w') as f:
    f.write("Chain\tResidue\tNumber\n")
    for res in sorted(set(stored.residues)):
        f.write(res + "\n")
python end

hide everything, protein
show cartoon, protein
show sticks, interface
color cyan, chain {chain1}
color magenta, chain {chain2}
color yellow, interface and elem C
orient interface
zoom interface, 8
ray 2400, 2400
png interface.png, dpi=300

# View 3: surface of the first partner
hide everything, protein
show surface, chain {chain1}
show cartoon, chain {chain2}
color cyan, chain {chain1}
color magenta, chain {chain2}
set transparency, 0.3, chain {chain1}
orient protein
zoom protein, 5
ray 2400, 2400
png surface.png, dpi=300
"#
    )
}
