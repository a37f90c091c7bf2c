//! Catch of the Day: one Common species per calendar day.

use super::catalog::COMMON_FISH;
use super::types::FishSpecies;
use chrono::NaiveDate;

/// Picks the Catch of the Day for an ISO date string (`YYYY-MM-DD`).
///
/// The code points of the string are summed and reduced modulo the Common
/// roster size, so the same date always yields the same species.
pub fn catch_of_the_day(date: &str) -> &'static FishSpecies {
    let hash: u64 = date.chars().map(|c| c as u64).sum();
    let index = (hash % COMMON_FISH.len() as u64) as usize;
    &COMMON_FISH[index]
}

/// Catch of the Day for a calendar date.
pub fn catch_of_the_day_for(date: NaiveDate) -> &'static FishSpecies {
    catch_of_the_day(&date_key(date))
}

/// The ISO day string used for hashing and as the persisted `date` field.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
