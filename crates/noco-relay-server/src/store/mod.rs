pub mod profile;

pub use profile::{ProfileState, ProfileStore, StoreSnapshot};
