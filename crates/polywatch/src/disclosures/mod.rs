pub mod domain;
pub mod index;
pub mod normalizer;

pub use domain::{DisclosureDataset, DisclosureDocument};
pub use index::{DisclosureIndex, DisclosureMatches};
pub use normalizer::{extract_surname, normalize_key, surname_key};
