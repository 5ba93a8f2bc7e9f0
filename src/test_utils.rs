//! Shared test fixtures.
//!
//! The fixture dataset is small but exercises every preparation edge: a two-member team entry
//! (one Gold, counted once), an exact duplicate row, a Winter row, an unmapped NOC code and a
//! medal-less entry.

use crate::app_state::{AppState, SharedAppState};
use crate::cli::CommandLineArgs;
use crate::dataset::{EventRecord, Medal, RegionRecord, Season};
use crate::prepare::{self, PreparedTable};

use std::sync::Arc;

/// Create an event record with fixture defaults for the athlete attributes.
pub(crate) fn get_test_event(
    id: u32,
    name: &str,
    noc: &str,
    year: i32,
    medal: Option<Medal>,
) -> EventRecord {
    event_record(
        id,
        name,
        noc,
        noc,
        year,
        "Sydney",
        "Athletics",
        "Athletics Men's 100 metres",
        medal,
        Season::Summer,
    )
}

#[allow(clippy::too_many_arguments)]
fn event_record(
    id: u32,
    name: &str,
    noc: &str,
    team: &str,
    year: i32,
    city: &str,
    sport: &str,
    event: &str,
    medal: Option<Medal>,
    season: Season,
) -> EventRecord {
    EventRecord {
        id,
        name: name.to_string(),
        sex: "M".to_string(),
        age: Some(24.0),
        height: Some(180.0),
        weight: Some(80.0),
        team: team.to_string(),
        noc: noc.to_string(),
        games: format!("{} {}", year, season),
        year,
        season,
        city: city.to_string(),
        sport: sport.to_string(),
        event: event.to_string(),
        medal,
    }
}

/// Create the fixture athlete event records.
pub(crate) fn get_test_events() -> Vec<EventRecord> {
    let team_gold_first = event_record(
        1,
        "Jean",
        "FRA",
        "France",
        2000,
        "Sydney",
        "Basketball",
        "Basketball Men's Basketball",
        Some(Medal::Gold),
        Season::Summer,
    );
    let team_gold_second = event_record(
        2,
        "Paul",
        "FRA",
        "France",
        2000,
        "Sydney",
        "Basketball",
        "Basketball Men's Basketball",
        Some(Medal::Gold),
        Season::Summer,
    );
    let silver = event_record(
        3,
        "Alice",
        "USA",
        "United States",
        2000,
        "Sydney",
        "Swimming",
        "Swimming Women's 100 metres Freestyle",
        Some(Medal::Silver),
        Season::Summer,
    );
    let duplicate = silver.clone();
    let gold = event_record(
        4,
        "Bob",
        "USA",
        "United States",
        2004,
        "Athina",
        "Swimming",
        "Swimming Men's 100 metres Freestyle",
        Some(Medal::Gold),
        Season::Summer,
    );
    let no_medal = event_record(
        5,
        "Carol",
        "GER",
        "Germany",
        2004,
        "Athina",
        "Rowing",
        "Rowing Women's Single Sculls",
        None,
        Season::Summer,
    );
    let unmapped_noc = event_record(
        6,
        "Dan",
        "KOS",
        "Kosovo",
        2004,
        "Athina",
        "Rowing",
        "Rowing Men's Single Sculls",
        Some(Medal::Bronze),
        Season::Summer,
    );
    let winter = event_record(
        7,
        "Heidi",
        "GER",
        "Germany",
        2002,
        "Salt Lake City",
        "Alpine Skiing",
        "Alpine Skiing Women's Slalom",
        Some(Medal::Gold),
        Season::Winter,
    );
    vec![
        team_gold_first,
        team_gold_second,
        silver,
        duplicate,
        gold,
        no_medal,
        unmapped_noc,
        winter,
    ]
}

/// Create the fixture NOC to region mapping. The KOS code is intentionally absent.
pub(crate) fn get_test_regions() -> Vec<RegionRecord> {
    let region = |noc: &str, region: &str| RegionRecord {
        noc: noc.to_string(),
        region: Some(region.to_string()),
        notes: None,
    };
    vec![
        region("FRA", "France"),
        region("USA", "USA"),
        region("GER", "Germany"),
    ]
}

/// Create a prepared table from the fixture dataset.
pub(crate) fn get_test_table() -> PreparedTable {
    prepare::prepare(get_test_events(), &get_test_regions())
}

/// Create command line arguments with default values.
pub(crate) fn get_test_args() -> CommandLineArgs {
    CommandLineArgs {
        host: "0.0.0.0".to_string(),
        port: 8080,
        https: false,
        cert_file: "cert.pem".to_string(),
        key_file: "key.pem".to_string(),
        graceful_shutdown_timeout: 60,
        events_file: "athlete_events.csv".to_string(),
        regions_file: "noc_regions.csv".to_string(),
        cors_origin: "http://localhost:3000".to_string(),
    }
}

/// Create shared application state over the fixture dataset.
pub(crate) fn get_test_state() -> SharedAppState {
    Arc::new(AppState {
        args: get_test_args(),
        table: get_test_table(),
    })
}
