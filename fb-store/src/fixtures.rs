//! Race calendar fixtures
//!
//! A fixed set of 2023–2025 races used to seed a development or test
//! instance of the races service.

use chrono::NaiveDate;

use crate::entities::Race;
use crate::error::CatalogResult;
use crate::services::RaceService;

const SEASON_RACES: &[(&str, i32, i32, (i32, u32, u32))] = &[
    // 2025
    ("Grand Prix of Monaco", 2025, 8, (2025, 5, 30)),
    ("British Grand Prix", 2025, 12, (2025, 7, 5)),
    // 2024
    ("Bahrain Grand Prix", 2024, 1, (2024, 3, 2)),
    ("Saudi Arabian Grand Prix", 2024, 2, (2024, 3, 9)),
    ("Australian Grand Prix", 2024, 3, (2024, 3, 24)),
    ("Japanese Grand Prix", 2024, 4, (2024, 4, 7)),
    ("Miami Grand Prix", 2024, 5, (2024, 5, 5)),
    ("Spanish Grand Prix", 2024, 6, (2024, 6, 23)),
    ("British Grand Prix", 2024, 7, (2024, 7, 7)),
    ("Belgian Grand Prix", 2024, 8, (2024, 7, 28)),
    ("Italian Grand Prix", 2024, 9, (2024, 9, 1)),
    ("Singapore Grand Prix", 2024, 10, (2024, 9, 22)),
    ("United States Grand Prix", 2024, 11, (2024, 10, 20)),
    ("Las Vegas Grand Prix", 2024, 12, (2024, 11, 23)),
    ("Abu Dhabi Grand Prix", 2024, 13, (2024, 12, 8)),
    // 2023
    ("Bahrain Grand Prix", 2023, 1, (2023, 3, 5)),
    ("Saudi Arabian Grand Prix", 2023, 2, (2023, 3, 19)),
    ("Australian Grand Prix", 2023, 3, (2023, 4, 2)),
    ("Azerbaijan Grand Prix", 2023, 4, (2023, 4, 30)),
    ("Miami Grand Prix", 2023, 5, (2023, 5, 7)),
    ("Spanish Grand Prix", 2023, 6, (2023, 6, 4)),
    ("British Grand Prix", 2023, 7, (2023, 7, 9)),
    ("Hungarian Grand Prix", 2023, 8, (2023, 7, 23)),
    ("Belgian Grand Prix", 2023, 9, (2023, 7, 30)),
    ("Italian Grand Prix", 2023, 10, (2023, 9, 3)),
    ("Singapore Grand Prix", 2023, 11, (2023, 9, 17)),
    ("United States Grand Prix", 2023, 12, (2023, 10, 22)),
    ("Las Vegas Grand Prix", 2023, 13, (2023, 11, 19)),
    ("Abu Dhabi Grand Prix", 2023, 14, (2023, 11, 26)),
];

/// The fixture races, without identities
pub fn season_races() -> Vec<Race> {
    SEASON_RACES
        .iter()
        .filter_map(|&(name, year, round, (y, m, d))| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| Race::new(name, year, round, date))
        })
        .collect()
}

/// Insert every fixture race, returning how many were stored
pub async fn seed_races(service: &RaceService) -> CatalogResult<usize> {
    tracing::info!("Loading fixture races");
    let mut loaded = 0;
    for race in season_races() {
        service.add_race(race).await?;
        loaded += 1;
    }
    tracing::info!(loaded, "fixture races loaded");
    Ok(loaded)
}
