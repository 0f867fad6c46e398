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

use tracing::{debug, info};

use crate::{
    ArchiveClient, CalendarEnumeration, CalendarKey, Channel, GoesArchiveConfig, Query, Region,
    errors::Result, index::parse_index
};

/// turns a [`Query`] into the list of image URLs within its time window.
///
/// Any error (unreachable archive, non-success index response, malformed index entry) aborts the
/// resolution - a partial file list would silently misrepresent the requested time window
#[derive(Debug)]
pub struct IndexResolver<C: ArchiveClient> {
    client: C,
    base_url: String,
    archive_path: String,
    index_file: String,
    default_region: Region,
    enumeration: CalendarEnumeration,
}

impl<C: ArchiveClient> IndexResolver<C> {
    pub fn new (client: C, config: &GoesArchiveConfig)->Self {
        IndexResolver {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            archive_path: config.archive_path.trim_matches('/').to_string(),
            index_file: config.index_file.clone(),
            default_region: config.default_region,
            enumeration: config.enumeration,
        }
    }

    /// the per-day directory URL for given key, region and channel
    pub fn directory_url (&self, key: &CalendarKey, region: Region, channel: Channel)->String {
        format!("{}/{}/{}/{}/{}", self.base_url, key.dir_path(), self.archive_path, region, channel)
    }

    pub fn index_url (&self, dir_url: &str)->String {
        format!("{}/{}", dir_url, self.index_file)
    }

    pub fn calendar_keys (&self, query: &Query)->Vec<CalendarKey> {
        self.enumeration.calendar_keys( query.start, query.end)
    }

    /// string based convenience wrapper for [`IndexResolver::resolve`] that uses the configured
    /// default region if none is given
    pub async fn resolve_str (&self, start: &str, end: &str, channel: &str, region: Option<&str>)->Result<Vec<String>> {
        let query = Query::parse( start, end, channel, region, self.default_region)?;
        self.resolve( &query).await
    }

    /// get the URLs of all files within the query time window (inclusive), ordered by ascending calendar
    /// key and then by index document order
    pub async fn resolve (&self, query: &Query)->Result<Vec<String>> {
        if query.is_inverted() {
            debug!("inverted time window [{} - {}], nothing to resolve", query.start, query.end);
            return Ok(Vec::new())
        }

        let mut files: Vec<String> = Vec::new();

        for key in self.calendar_keys( query) {
            if !key.is_valid_date() {
                debug!("skipping non-existing date {key}");
                continue
            }

            let dir_url = self.directory_url( &key, query.region, query.channel);
            let index_url = self.index_url( &dir_url);
            let text = self.client.get_index( &index_url).await?;

            let n_files = files.len();
            for entry in parse_index( &text)? {
                if query.contains( &entry.date) {
                    files.push( format!("{}/{}", dir_url, entry.filename))
                }
            }
            debug!("{} matching files in {}", files.len() - n_files, index_url);
        }

        info!("resolved {} {} files for {} in [{} - {}]", files.len(), query.channel, query.region, query.start, query.end);
        Ok(files)
    }
}
