pub mod codec;
pub mod identifier;

pub use codec::{ID_PREFIX_LEN, compose, extract_id_from_slug, generate_slug, generate_unique_slug};
pub use identifier::{IdPrefix, SlugIdentifier};
