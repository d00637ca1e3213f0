pub mod ids;
pub mod io;
pub mod models;
pub mod residues;
pub mod selection;
