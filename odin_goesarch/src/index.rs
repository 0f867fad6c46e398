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
use odin_common::datetime::parse_naive_utc;

use crate::errors::{Result, index_entry_error};

/// length of the `YYYYMMDDHHMMSS` timestamp that follows the last '_' of archive filenames
pub const TIMESTAMP_LEN: usize = 14;
pub const INDEX_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// one line of a per-day index document
///
/// example: `southeast_abi13_20180107120000.png`
#[derive(Debug,Clone,PartialEq)]
pub struct IndexEntry {
    pub filename: String,
    pub date: DateTime<Utc>,
}

impl IndexEntry {
    /// parse a single index line. Trailing line terminators are stripped from the filename
    pub fn parse (line: &str)->Result<Self> {
        let filename = line.trim_end_matches( ['\n','\r']);
        let date = parse_naive_utc( extract_timestamp( filename)?, INDEX_TIMESTAMP_FORMAT)
            .map_err( |e| index_entry_error( format!("'{filename}' has no valid timestamp: {e}")))?;

        Ok( IndexEntry { filename: filename.to_string(), date } )
    }
}

/// get the timestamp string that immediately follows the last '_' of a filename
pub fn extract_timestamp (filename: &str)->Result<&str> {
    let idx = filename.rfind('_')
        .ok_or_else( || index_entry_error( format!("no '_' in '{filename}'")))? + 1;

    filename.get( idx..idx+TIMESTAMP_LEN)
        .ok_or_else( || index_entry_error( format!("'{filename}' too short for timestamp")))
}

/// parse all non-blank lines of an index document. This fails on the first malformed entry
pub fn parse_index (text: &str)->Result<Vec<IndexEntry>> {
    text.lines()
        .filter( |line| !line.trim().is_empty())
        .map( IndexEntry::parse)
        .collect()
}
