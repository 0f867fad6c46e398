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

use chrono::{DateTime, NaiveDateTime, ParseError, TimeDelta, Utc};
use serde::{Deserialize,Deserializer};
use std::time::Duration;
use parse_duration::parse;

pub fn is_between_inclusive (dt: &DateTime<Utc>, dt_start: &DateTime<Utc>, dt_end: &DateTime<Utc>) -> bool {
    dt >= dt_start && dt <= dt_end
}

/// iterate in one hour steps from `dt_start` up to and including `dt_end`.
/// The iterator is empty if `dt_start` is after `dt_end`
pub fn hourly_steps (dt_start: DateTime<Utc>, dt_end: DateTime<Utc>) -> impl Iterator<Item=DateTime<Utc>> {
    std::iter::successors( Some(dt_start), |dt| dt.checked_add_signed( TimeDelta::hours(1)))
        .take_while( move |dt| *dt <= dt_end)
}

/// parse a DateTime<Utc> from a string that does not include a timezone (which is then assumed to be UTC)
pub fn parse_naive_utc (s: &str, fmt: &str) -> Result<DateTime<Utc>,ParseError> {
    NaiveDateTime::parse_from_str( s, fmt).map(|ndt| ndt.and_utc())
}

//--- support for serde

pub fn deserialize_optional_duration <'a,D>(deserializer: D) -> Result<Option<Duration>,D::Error>
    where D: Deserializer<'a>
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    if let Some(s) = s {
        let d =  parse(s.as_str()).map_err( |e| serde::de::Error::custom(format!("{:?}",e)))?;
        return Ok( Some(d) )
    }

    Ok(None)
}
