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

use std::str::FromStr;
use serde::{Serialize,Deserialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::errors::{OdinGoesArchiveError, Result};

/// the regional sectors of the archive. The lowercase variant name is the archive directory name
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Default,Serialize,Deserialize,EnumString,AsRefStr,Display,EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Region {
    Gulf,
    #[default]
    NorthCentral,
    NorthEast,
    NorthMexico,
    NorthWest,
    PrRegional,
    SouthCentral,
    SouthEast,
    SouthMexico,
    SouthWest,
}

impl Region {
    pub fn parse (s: &str)->Result<Self> {
        Region::from_str(s).map_err( |_| OdinGoesArchiveError::RegionError(format!("unknown region '{s}'")))
    }

    /// parse optional region name, falling back to the provided default
    pub fn parse_or (opt_s: Option<&str>, default_region: Region)->Result<Self> {
        match opt_s {
            Some(s) => Region::parse(s),
            None => Ok(default_region)
        }
    }
}
