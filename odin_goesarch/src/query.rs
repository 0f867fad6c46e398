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

use chrono::{DateTime, Utc};
use odin_common::datetime::{is_between_inclusive, parse_naive_utc};

use crate::{Channel, Region, errors::{Result, date_parse_error}};

/// the user facing format of query start/end times, e.g. "2018-01-07/12"
pub const QUERY_DTG_FORMAT: &str = "%Y-%m-%d/%H";

/// parse a "YYYY-mm-dd/HH" (UTC) hour spec.
/// chrono does not build a NaiveDateTime without minutes so we parse with an explicit ":00" suffix,
/// which also rejects input that already specifies minutes
pub fn parse_query_dtg (s: &str)->Result<DateTime<Utc>> {
    parse_naive_utc( &format!("{s}:00"), "%Y-%m-%d/%H:%M")
        .map_err( |e| date_parse_error( format!("'{s}' does not match {QUERY_DTG_FORMAT}: {e}")))
}

/// the immutable parameters of one archive retrieval
#[derive(Debug,Clone,PartialEq)]
pub struct Query {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub channel: Channel,
    pub region: Region,
}

impl Query {
    /// note that we do not check start <= end. An inverted time window just doesn't match anything
    pub fn new (start: DateTime<Utc>, end: DateTime<Utc>, channel: Channel, region: Region)->Self {
        Query { start, end, channel, region }
    }

    /// create a query from user input strings, using `default_region` if no region is given
    pub fn parse (start: &str, end: &str, channel: &str, region: Option<&str>, default_region: Region)->Result<Self> {
        let channel: Channel = channel.parse()?;
        let region = Region::parse_or( region, default_region)?;
        let start = parse_query_dtg( start)?;
        let end = parse_query_dtg( end)?;

        Ok( Query::new( start, end, channel, region) )
    }

    /// is given date within the (inclusive) time window of this query
    pub fn contains (&self, dt: &DateTime<Utc>)->bool {
        is_between_inclusive( dt, &self.start, &self.end)
    }

    pub fn is_inverted (&self)->bool {
        self.start > self.end
    }
}
