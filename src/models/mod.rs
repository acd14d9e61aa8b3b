pub mod artwork;
pub mod history;
pub mod profile;

pub use artwork::{Artwork, ArtworkStatus};
pub use history::{ExhibitionBooking, OrderRecord, UserHistory};
pub use profile::{ArtistAffinity, MediumAffinity, PreferenceProfile, PriceBand, PurchaseRecord};
