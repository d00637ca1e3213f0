pub mod correspondence;
pub mod kabsch;

pub use correspondence::{Correspondence, PositionalTruncation};
pub use kabsch::{Superposition, SuperpositionError, superpose, superpose_with};
