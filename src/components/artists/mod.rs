mod reducer;

pub use reducer::{reduce, ArtistAction, ArtistState};
