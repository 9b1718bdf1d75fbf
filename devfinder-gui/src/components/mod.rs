pub mod profile_card;
pub mod profile_lookup;
