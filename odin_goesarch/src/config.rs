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

use std::{path::{Path,PathBuf}, time::Duration};
use serde::Deserialize;
use odin_common::datetime::deserialize_optional_duration;

use crate::{CalendarEnumeration, Region, errors::{OdinGoesArchiveError, Result}};

pub const ARCHIVE_BASE_URL: &str = "https://mtarchive.geol.iastate.edu";
pub const ARCHIVE_PATH: &str = "cod/sat/goes16/regional";
pub const INDEX_FILE: &str = "000index.txt";
pub const DOWNLOAD_DIR: &str = "satellite_data";

/// archive location and download settings. Missing fields in RON sources are set to the [`Default`] values
#[derive(Deserialize,Debug,Clone,PartialEq)]
#[serde(default)]
pub struct GoesArchiveConfig {
    pub base_url: String,      // e.g. "https://mtarchive.geol.iastate.edu"
    pub archive_path: String,  // path between date and region, e.g. "cod/sat/goes16/regional"
    pub index_file: String,    // name of per-directory index document
    pub default_region: Region,
    pub download_dir: PathBuf,

    #[serde(deserialize_with = "deserialize_optional_duration")]
    pub timeout: Option<Duration>, // per request, None blocks indefinitely

    pub enumeration: CalendarEnumeration,
}

impl Default for GoesArchiveConfig {
    fn default()->Self {
        GoesArchiveConfig {
            base_url: ARCHIVE_BASE_URL.to_string(),
            archive_path: ARCHIVE_PATH.to_string(),
            index_file: INDEX_FILE.to_string(),
            default_region: Region::default(),
            download_dir: PathBuf::from(DOWNLOAD_DIR),
            timeout: None,
            enumeration: CalendarEnumeration::default(),
        }
    }
}

pub fn parse_config (src: &str)->Result<GoesArchiveConfig> {
    ron::from_str( src).map_err( |e| OdinGoesArchiveError::ConfigParseError( e.to_string()))
}

pub fn load_config (path: impl AsRef<Path>)->Result<GoesArchiveConfig> {
    let src = std::fs::read_to_string( path.as_ref())?;
    parse_config( &src)
}
