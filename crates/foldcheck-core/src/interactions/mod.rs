pub mod compare;
pub mod contact_map;
pub mod profile;
pub mod record;

pub use compare::{ComparisonResult, OverallMetrics, TypeMetrics, compare};
pub use contact_map::{ContactMapError, parse_contact_map, parse_contact_map_path};
pub use profile::{DistanceStats, InteractionProfile, profile};
pub use record::{Interaction, InteractionKey, InteractionSet};
