//! Dataset preparation.
//!
//! Derives the analysis-ready table from the loaded source tables. The pipeline runs once at
//! startup, in a fixed deterministic order: retain Summer rows, left-join the region mapping on
//! NOC code, remove exact duplicate rows, then derive the one-hot medal columns. The resulting
//! [PreparedTable] is immutable for the process lifetime.

use crate::dataset::{EventRecord, Medal, RegionRecord, Season};

use std::collections::{HashMap, HashSet};

/// One row of the prepared table.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRow {
    /// Numeric athlete identifier
    pub id: u32,
    /// Athlete name
    pub name: String,
    /// Athlete sex
    pub sex: String,
    /// Athlete age in years
    pub age: Option<f32>,
    /// Athlete height in centimetres
    pub height: Option<f32>,
    /// Athlete weight in kilograms
    pub weight: Option<f32>,
    /// Team name
    pub team: String,
    /// National Olympic Committee code
    pub noc: String,
    /// Games label
    pub games: String,
    /// Edition year
    pub year: i32,
    /// Host city
    pub city: String,
    /// Sport
    pub sport: String,
    /// Event name within the sport
    pub event: String,
    /// Medal outcome, if any
    pub medal: Option<Medal>,
    /// Region joined from the NOC mapping, null when the code is unmapped
    pub region: Option<String>,
    /// True iff the medal outcome is Gold
    pub gold: bool,
    /// True iff the medal outcome is Silver
    pub silver: bool,
    /// True iff the medal outcome is Bronze
    pub bronze: bool,
}

/// The joined, filtered, deduplicated working set.
///
/// Constructed once at startup and never mutated; request handlers share it by reference.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreparedTable {
    rows: Vec<PreparedRow>,
}

impl PreparedTable {
    /// Returns the prepared rows.
    pub fn rows(&self) -> &[PreparedRow] {
        &self.rows
    }

    /// Returns the number of prepared rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Identity of a prepared row, used for exact duplicate removal.
///
/// Absent numeric fields compare equal to each other; present values compare by bit pattern.
#[derive(Eq, Hash, PartialEq)]
struct RowIdentity<'a> {
    id: u32,
    name: &'a str,
    sex: &'a str,
    age: Option<u32>,
    height: Option<u32>,
    weight: Option<u32>,
    team: &'a str,
    noc: &'a str,
    games: &'a str,
    year: i32,
    city: &'a str,
    sport: &'a str,
    event: &'a str,
    medal: Option<Medal>,
    region: Option<&'a str>,
}

impl<'a> RowIdentity<'a> {
    fn of(row: &'a PreparedRow) -> Self {
        Self {
            id: row.id,
            name: &row.name,
            sex: &row.sex,
            age: row.age.map(f32::to_bits),
            height: row.height.map(f32::to_bits),
            weight: row.weight.map(f32::to_bits),
            team: &row.team,
            noc: &row.noc,
            games: &row.games,
            year: row.year,
            city: &row.city,
            sport: &row.sport,
            event: &row.event,
            medal: row.medal,
            region: row.region.as_deref(),
        }
    }
}

/// Build the prepared table from the loaded source tables.
///
/// # Arguments
///
/// * `events`: Athlete event records
/// * `regions`: NOC to region mapping records
pub fn prepare(events: Vec<EventRecord>, regions: &[RegionRecord]) -> PreparedTable {
    let mapping = region_mapping(regions);

    // Retain Summer rows and left-join the region mapping on NOC code.
    let joined: Vec<PreparedRow> = events
        .into_iter()
        .filter(|event| event.season == Season::Summer)
        .map(|event| join_region(event, &mapping))
        .collect();

    // Remove exact duplicates, keeping the first occurrence.
    let mut seen = HashSet::with_capacity(joined.len());
    let keep: Vec<bool> = joined
        .iter()
        .map(|row| seen.insert(RowIdentity::of(row)))
        .collect();
    drop(seen);
    let mut rows: Vec<PreparedRow> = joined
        .into_iter()
        .zip(keep)
        .filter_map(|(row, keep)| keep.then_some(row))
        .collect();

    // Derive the one-hot medal columns.
    for row in &mut rows {
        row.gold = row.medal == Some(Medal::Gold);
        row.silver = row.medal == Some(Medal::Silver);
        row.bronze = row.medal == Some(Medal::Bronze);
    }

    PreparedTable { rows }
}

/// Build the NOC to region lookup.
///
/// The mapping must be many-to-one; duplicate NOC codes in the source are resolved by keeping
/// the first occurrence.
fn region_mapping(regions: &[RegionRecord]) -> HashMap<&str, Option<&str>> {
    let mut mapping: HashMap<&str, Option<&str>> = HashMap::with_capacity(regions.len());
    for record in regions {
        mapping
            .entry(&record.noc)
            .or_insert_with(|| record.region.as_deref());
    }
    mapping
}

/// Join one event record to the region mapping, keeping a null region when the NOC code is
/// unmapped.
fn join_region(event: EventRecord, mapping: &HashMap<&str, Option<&str>>) -> PreparedRow {
    let region = mapping
        .get(event.noc.as_str())
        .copied()
        .flatten()
        .map(str::to_owned);
    PreparedRow {
        id: event.id,
        name: event.name,
        sex: event.sex,
        age: event.age,
        height: event.height,
        weight: event.weight,
        team: event.team,
        noc: event.noc,
        games: event.games,
        year: event.year,
        city: event.city,
        sport: event.sport,
        event: event.event,
        medal: event.medal,
        region,
        gold: false,
        silver: false,
        bronze: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_winter_rows_filtered() {
        let table = test_utils::get_test_table();
        assert!(table.rows().iter().all(|row| !row.games.contains("Winter")));
        // The fixture has one Winter row and one exact duplicate among eight events.
        assert_eq!(6, table.len());
    }

    #[test]
    fn test_join_mapped_noc() {
        let table = test_utils::get_test_table();
        let row = table.rows().iter().find(|row| row.noc == "FRA").unwrap();
        assert_eq!(Some("France".to_string()), row.region);
    }

    #[test]
    fn test_join_unmapped_noc_keeps_null_region() {
        let table = test_utils::get_test_table();
        let row = table.rows().iter().find(|row| row.noc == "KOS").unwrap();
        assert_eq!(None, row.region);
    }

    #[test]
    fn test_join_mapping_without_region_keeps_null_region() {
        let events = vec![test_utils::get_test_event(
            1,
            "Refugee",
            "ROT",
            2016,
            None,
        )];
        let regions = vec![RegionRecord {
            noc: "ROT".to_string(),
            region: None,
            notes: Some("Refugee Olympic Team".to_string()),
        }];
        let table = prepare(events, &regions);
        assert_eq!(None, table.rows()[0].region);
    }

    #[test]
    fn test_duplicate_mapping_first_wins() {
        let events = vec![test_utils::get_test_event(1, "Jean", "FRA", 2000, None)];
        let regions = vec![
            RegionRecord {
                noc: "FRA".to_string(),
                region: Some("France".to_string()),
                notes: None,
            },
            RegionRecord {
                noc: "FRA".to_string(),
                region: Some("Gaul".to_string()),
                notes: None,
            },
        ];
        let table = prepare(events, &regions);
        assert_eq!(Some("France".to_string()), table.rows()[0].region);
    }

    #[test]
    fn test_exact_duplicates_removed() {
        let event = test_utils::get_test_event(1, "Alice", "USA", 2000, Some(Medal::Silver));
        let table = prepare(vec![event.clone(), event], &test_utils::get_test_regions());
        assert_eq!(1, table.len());
    }

    #[test]
    fn test_rows_differing_only_in_id_both_kept() {
        let first = test_utils::get_test_event(1, "Alice", "USA", 2000, Some(Medal::Silver));
        let mut second = first.clone();
        second.id = 2;
        let table = prepare(vec![first, second], &test_utils::get_test_regions());
        assert_eq!(2, table.len());
    }

    #[test]
    fn test_duplicates_with_absent_numeric_fields_removed() {
        let mut event = test_utils::get_test_event(1, "Alice", "USA", 2000, None);
        event.age = None;
        event.height = None;
        event.weight = None;
        let table = prepare(vec![event.clone(), event], &test_utils::get_test_regions());
        assert_eq!(1, table.len());
    }

    #[test]
    fn test_one_hot_medal_columns() {
        let events = vec![
            test_utils::get_test_event(1, "Jean", "FRA", 2000, Some(Medal::Gold)),
            test_utils::get_test_event(2, "Alice", "USA", 2000, Some(Medal::Silver)),
            test_utils::get_test_event(3, "Dan", "GER", 2000, Some(Medal::Bronze)),
            test_utils::get_test_event(4, "Carol", "GER", 2000, None),
        ];
        let table = prepare(events, &test_utils::get_test_regions());
        let flags: Vec<(bool, bool, bool)> = table
            .rows()
            .iter()
            .map(|row| (row.gold, row.silver, row.bronze))
            .collect();
        assert_eq!(
            vec![
                (true, false, false),
                (false, true, false),
                (false, false, true),
                (false, false, false),
            ],
            flags
        );
    }

    #[test]
    fn test_first_occurrence_order_preserved() {
        let first = test_utils::get_test_event(1, "Jean", "FRA", 2000, Some(Medal::Gold));
        let second = test_utils::get_test_event(2, "Alice", "USA", 2004, Some(Medal::Silver));
        let table = prepare(
            vec![first.clone(), second, first],
            &test_utils::get_test_regions(),
        );
        assert_eq!(2, table.len());
        assert_eq!("Jean", table.rows()[0].name);
        assert_eq!("Alice", table.rows()[1].name);
    }

    #[test]
    fn test_empty_input() {
        let table = prepare(Vec::new(), &test_utils::get_test_regions());
        assert!(table.is_empty());
        assert_eq!(0, table.len());
    }
}
