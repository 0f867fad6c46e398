/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::{collections::BTreeSet, fmt};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Serialize,Deserialize};
use odin_common::datetime::hourly_steps;

/// (year,month,day) triple that identifies a per-day archive directory.
/// Keys are not necessarily valid dates (see [`CalendarEnumeration::CartesianProduct`])
#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub struct CalendarKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarKey {
    pub fn new (year: i32, month: u32, day: u32)->Self { CalendarKey { year, month, day } }

    pub fn from_date<D: Datelike> (d: &D)->Self { CalendarKey::new( d.year(), d.month(), d.day()) }

    /// None if this key does not correspond to a real calendar day (e.g. Feb 31)
    pub fn to_naive_date (&self)->Option<NaiveDate> {
        NaiveDate::from_ymd_opt( self.year, self.month, self.day)
    }

    pub fn is_valid_date (&self)->bool { self.to_naive_date().is_some() }

    /// the "YYYY/MM/DD" path segments of this key
    pub fn dir_path (&self)->String {
        format!("{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for CalendarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// strategy to derive the per-day directories we have to look at for a given time window
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
pub enum CalendarEnumeration {
    /// the actual calendar days touched by the time window
    #[default]
    DayWalk,

    /// the cartesian product of all distinct years, months and days touched by the time window.
    /// This over-generates for windows that span month boundaries (e.g. 01/31 - 02/01 yields 01/01, 01/31, 02/01
    /// and the invalid 02/31) and is only kept to reproduce the directory scan of older tools
    CartesianProduct,
}

impl CalendarEnumeration {
    /// calendar keys in ascending order. Empty if `start` is after `end`
    pub fn calendar_keys (&self, start: DateTime<Utc>, end: DateTime<Utc>)->Vec<CalendarKey> {
        match self {
            CalendarEnumeration::DayWalk => day_walk_keys( start, end),
            CalendarEnumeration::CartesianProduct => cartesian_product_keys( start, end)
        }
    }
}

pub fn day_walk_keys (start: DateTime<Utc>, end: DateTime<Utc>)->Vec<CalendarKey> {
    let keys: BTreeSet<CalendarKey> = hourly_steps( start, end).map( |dt| CalendarKey::from_date(&dt)).collect();
    keys.into_iter().collect()
}

pub fn cartesian_product_keys (start: DateTime<Utc>, end: DateTime<Utc>)->Vec<CalendarKey> {
    let mut years: BTreeSet<i32> = BTreeSet::new();
    let mut months: BTreeSet<u32> = BTreeSet::new();
    let mut days: BTreeSet<u32> = BTreeSet::new();

    for dt in hourly_steps( start, end) {
        years.insert( dt.year());
        months.insert( dt.month());
        days.insert( dt.day());
    }

    let mut keys = Vec::with_capacity( years.len() * months.len() * days.len());
    for year in &years {
        for month in &months {
            for day in &days {
                keys.push( CalendarKey::new( *year, *month, *day))
            }
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_query_dtg;

    fn keys (enumeration: CalendarEnumeration, start: &str, end: &str)->Vec<CalendarKey> {
        enumeration.calendar_keys( parse_query_dtg(start).unwrap(), parse_query_dtg(end).unwrap())
    }

    #[test]
    fn test_single_day() {
        for e in [CalendarEnumeration::DayWalk, CalendarEnumeration::CartesianProduct] {
            let ks = keys( e, "2018-01-07/12", "2018-01-07/18");
            assert_eq!( ks, vec![ CalendarKey::new(2018, 1, 7)]);
            assert_eq!( ks[0].dir_path(), "2018/01/07");
        }
    }

    #[test]
    fn test_day_walk() {
        let ks = keys( CalendarEnumeration::DayWalk, "2018-01-30/22", "2018-02-02/01");
        assert_eq!( ks, vec![
            CalendarKey::new(2018, 1, 30), CalendarKey::new(2018, 1, 31),
            CalendarKey::new(2018, 2, 1), CalendarKey::new(2018, 2, 2)
        ]);
    }

    #[test]
    fn test_cartesian_over_generation() {
        let start = "2018-01-31/22";
        let end = "2018-02-01/02";

        let actual = keys( CalendarEnumeration::DayWalk, start, end);
        let generated = keys( CalendarEnumeration::CartesianProduct, start, end);

        assert_eq!( actual.len(), 2);
        assert_eq!( generated.len(), 4); // {2018} x {1,2} x {1,31}
        assert!( generated.len() >= actual.len());
        for k in &actual { assert!( generated.contains(k)) }

        // combinations that never occurred in the time window, one of them not even a date
        assert!( generated.contains( &CalendarKey::new(2018, 1, 1)));
        assert!( !CalendarKey::new(2018, 2, 31).is_valid_date());
        assert!( generated.contains( &CalendarKey::new(2018, 2, 31)));
    }

    #[test]
    fn test_cartesian_covers_actual_days() {
        let ranges = [
            ("2017-12-30/00", "2018-01-02/00"),
            ("2018-02-27/12", "2018-03-03/12"),
            ("2018-05-31/23", "2018-06-01/00"),
        ];
        for (start,end) in ranges {
            let actual = keys( CalendarEnumeration::DayWalk, start, end);
            let generated = keys( CalendarEnumeration::CartesianProduct, start, end);
            assert!( generated.len() >= actual.len(), "{start} - {end}");
            for k in &actual { assert!( generated.contains(k), "{k} missing for {start} - {end}") }
        }
    }

    #[test]
    fn test_inverted_range() {
        assert!( keys( CalendarEnumeration::DayWalk, "2018-01-07/18", "2018-01-07/12").is_empty());
        assert!( keys( CalendarEnumeration::CartesianProduct, "2018-01-07/18", "2018-01-07/12").is_empty());
    }
}
