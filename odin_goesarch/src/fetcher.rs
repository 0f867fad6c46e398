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

use std::{io::{self, Write}, path::{Path,PathBuf}};
use tracing::{debug, info, warn};
use odin_common::net::url_file_name;

use crate::ArchiveClient;

#[derive(Debug,Clone,PartialEq)]
pub struct FetchFailure {
    pub url: String,
    pub reason: String,
}

/// outcome of a [`Fetcher::fetch`] batch
#[derive(Debug,Clone,Default,PartialEq)]
pub struct FetchReport {
    pub attempted: usize,
    pub downloaded: Vec<(PathBuf,u64)>, // local path and file size
    pub failed: Vec<FetchFailure>,
}

impl FetchReport {
    pub fn n_downloaded (&self)->usize { self.downloaded.len() }
    pub fn n_failed (&self)->usize { self.failed.len() }
    pub fn n_bytes (&self)->u64 { self.downloaded.iter().map(|(_,len)| *len).sum() }

    /// true if all attempted files were downloaded
    pub fn is_complete (&self)->bool { self.failed.is_empty() }
}

/// best-effort batch download of archive files into a local directory.
/// Files keep their remote filename. Failures of single files are logged and recorded in the [`FetchReport`]
/// but do not abort the batch
#[derive(Debug)]
pub struct Fetcher<C: ArchiveClient> {
    client: C,
    download_dir: PathBuf,
}

impl<C: ArchiveClient> Fetcher<C> {
    pub fn new (client: C, download_dir: impl AsRef<Path>)->Self {
        Fetcher { client, download_dir: download_dir.as_ref().to_path_buf() }
    }

    pub fn download_dir (&self)->&Path { &self.download_dir }

    /// download all given URLs in order. The filename of each file is printed to stdout before its
    /// download is attempted
    pub async fn fetch (&self, files: &[String])->FetchReport {
        self.fetch_with_status( files, &mut io::stdout()).await
    }

    /// same as [`Fetcher::fetch`] but writes the status lines (one filename per attempt) to `status`
    pub async fn fetch_with_status<W: Write> (&self, files: &[String], status: &mut W)->FetchReport {
        let mut report = FetchReport::default();

        for url in files {
            report.attempted += 1;

            let Some(fname) = url_file_name( url) else {
                write_status( status, url);
                warn!("skipping {url}: no file name");
                report.failed.push( FetchFailure { url: url.clone(), reason: "no file name".to_string() });
                continue
            };

            write_status( status, fname);
            let path = self.download_dir.join( fname);

            match self.client.download( url, &path).await {
                Ok(len) => {
                    debug!("downloaded {len} bytes to {path:?}");
                    report.downloaded.push( (path,len));
                }
                Err(e) => {
                    warn!("failed to download {url}: {e}");
                    report.failed.push( FetchFailure { url: url.clone(), reason: e.to_string() });
                }
            }
        }

        info!("downloaded {} of {} files to {:?}", report.n_downloaded(), report.attempted, self.download_dir);
        report
    }
}

// status write errors are only logged
fn write_status<W: Write> (status: &mut W, line: &str) {
    if let Err(e) = writeln!( status, "{line}").and_then( |_| status.flush()) {
        warn!("failed to write status: {e}");
    }
}
