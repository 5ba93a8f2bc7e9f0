//! Aggregation queries.
//!
//! Four read-only functions over the prepared table, one per dashboard view. Each takes the
//! table by reference together with any request parameters and returns an ordered sequence of
//! records; none of them mutate the table, so arbitrarily many request handlers may call them
//! concurrently without locking.

use crate::dataset::Medal;
use crate::models::{NationCount, SummaryStats, TallyRow, YearEntry, YearSelection};
use crate::prepare::PreparedTable;

use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Identity of a medal-winning entry, used to count team events once per team rather than once
/// per team member.
#[derive(Eq, Hash, PartialEq)]
struct MedalKey<'a> {
    team: &'a str,
    noc: &'a str,
    games: &'a str,
    year: i32,
    city: &'a str,
    sport: &'a str,
    event: &'a str,
    medal: Option<Medal>,
}

/// Medal counters accumulated per region.
#[derive(Default)]
struct MedalSums {
    gold: u64,
    silver: u64,
    bronze: u64,
}

/// Returns the six dashboard summary counts.
///
/// The most recent edition in the source data is treated as incomplete and excluded from the
/// editions count; the count saturates at zero for an empty table.
pub fn summary_stats(table: &PreparedTable) -> SummaryStats {
    let mut years = HashSet::new();
    let mut hosts = HashSet::new();
    let mut sports = HashSet::new();
    let mut events = HashSet::new();
    let mut athletes = HashSet::new();
    let mut nations = HashSet::new();
    for row in table.rows() {
        years.insert(row.year);
        hosts.insert(row.city.as_str());
        sports.insert(row.sport.as_str());
        events.insert(row.event.as_str());
        athletes.insert(row.name.as_str());
        if let Some(region) = row.region.as_deref() {
            nations.insert(region);
        }
    }
    SummaryStats {
        editions: (years.len() as u64).saturating_sub(1),
        hosts: hosts.len() as u64,
        sports: sports.len() as u64,
        events: events.len() as u64,
        athletes: athletes.len() as u64,
        nations: nations.len() as u64,
    }
}

/// Returns the medal tally per region, optionally filtered to a single year.
///
/// Rows are first deduplicated on (team, NOC, games, year, city, sport, event, medal) so that a
/// team event counts one medal per team. Rows without a region are excluded from the grouping.
/// The result is ordered by Gold count descending; the sort is stable, so regions with equal
/// Gold counts stay in region name order.
pub fn medal_tally(table: &PreparedTable, selection: YearSelection) -> Vec<TallyRow> {
    let mut seen = HashSet::new();
    let mut sums: BTreeMap<&str, MedalSums> = BTreeMap::new();
    for row in table.rows() {
        let key = MedalKey {
            team: &row.team,
            noc: &row.noc,
            games: &row.games,
            year: row.year,
            city: &row.city,
            sport: &row.sport,
            event: &row.event,
            medal: row.medal,
        };
        if !seen.insert(key) {
            continue;
        }
        if let YearSelection::Year(year) = selection {
            if row.year != year {
                continue;
            }
        }
        let Some(region) = row.region.as_deref() else {
            continue;
        };
        let entry = sums.entry(region).or_default();
        entry.gold += u64::from(row.gold);
        entry.silver += u64::from(row.silver);
        entry.bronze += u64::from(row.bronze);
    }
    let mut tally: Vec<TallyRow> = sums
        .into_iter()
        .map(|(region, sums)| TallyRow {
            region: region.to_string(),
            gold: sums.gold,
            silver: sums.silver,
            bronze: sums.bronze,
            total: sums.gold + sums.silver + sums.bronze,
        })
        .collect();
    tally.sort_by(|a, b| b.gold.cmp(&a.gold));
    tally
}

/// Returns the number of participating nations per year, ascending by year.
///
/// Rows are deduplicated on (year, region) pairs, one per nation per year it participated; a
/// null region counts as a single participant key per year.
pub fn nations_over_time(table: &PreparedTable) -> Vec<NationCount> {
    let mut seen: HashSet<(i32, Option<&str>)> = HashSet::new();
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for row in table.rows() {
        if seen.insert((row.year, row.region.as_deref())) {
            *counts.entry(row.year).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(year, count)| NationCount { year, count })
        .collect()
}

/// Returns the year filter list: the "Overall" sentinel followed by the distinct years in
/// ascending order.
pub fn years(table: &PreparedTable) -> Vec<YearEntry> {
    let distinct: BTreeSet<i32> = table.rows().iter().map(|row| row.year).collect();
    std::iter::once(YearEntry::overall())
        .chain(distinct.into_iter().map(YearEntry::Year))
        .collect()
}
