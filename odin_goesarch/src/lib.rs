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

//! retrieval of archived GOES-16 regional imagery from the Iowa Environmental Mesonet HTTP archive.
//!
//! The archive keeps one directory per day, region and channel:
//! ```text
//!   «base_url» / «YYYY» / «MM» / «DD» / cod/sat/goes16/regional / «region» / «channel» /
//! ```
//! each with an index document (`000index.txt`) that lists one image filename per line. Filenames
//! carry their (UTC) scan time as a 14 digit `YYYYMMDDHHMMSS` suffix after the last underscore, e.g.
//! `southeast_abi13_20180107120000.png`.
//!
//! Downloading is a two step process: the [`IndexResolver`] turns a [`Query`] into the list of image
//! URLs within the requested time window, then the [`Fetcher`] retrieves them one by one into a local
//! directory, continuing past failed files and reporting them in a [`FetchReport`].

mod errors;
pub use errors::*;

pub mod channel;
pub use channel::*;

pub mod region;
pub use region::*;

pub mod query;
pub use query::*;

pub mod calendar;
pub use calendar::*;

pub mod index;
pub use index::*;

pub mod client;
pub use client::*;

pub mod resolver;
pub use resolver::*;

pub mod fetcher;
pub use fetcher::*;

pub mod config;
pub use config::*;
