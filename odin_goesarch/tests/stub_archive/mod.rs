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
#![allow(unused)]

//! in-memory ArchiveClient for resolver and fetcher tests

use std::{collections::{HashMap,HashSet}, io::Write, path::Path, sync::Mutex};
use async_trait::async_trait;
use odin_common::net::OdinNetError;
use odin_goesarch::{ArchiveClient, GoesArchiveConfig, OdinGoesArchiveError, Result};

pub const BASE_URL: &str = "http://archive.test";

pub fn test_config ()->GoesArchiveConfig {
    GoesArchiveConfig { base_url: BASE_URL.to_string(), ..GoesArchiveConfig::default() }
}

/// the directory URL of the default archive layout
pub fn dir_url (date_path: &str, region: &str, channel: &str)->String {
    format!("{BASE_URL}/{date_path}/cod/sat/goes16/regional/{region}/{channel}")
}

#[derive(Default)]
pub struct StubArchive {
    indices: HashMap<String,String>, // index url -> index text
    failing: HashSet<String>,        // file urls that fail to download
    requests: Mutex<Vec<String>>,    // requested urls and status lines, in order
}

impl StubArchive {
    pub fn new ()->Self { StubArchive::default() }

    pub fn with_index (mut self, dir_url: &str, lines: &[&str])->Self {
        let mut text = lines.join("\n");
        text.push('\n');
        self.indices.insert( format!("{dir_url}/000index.txt"), text);
        self
    }

    pub fn with_failing (mut self, url: &str)->Self {
        self.failing.insert( url.to_string());
        self
    }

    pub fn requested (&self)->Vec<String> { self.requests.lock().unwrap().clone() }

    pub fn clear_requests (&self) { self.requests.lock().unwrap().clear() }

    fn record (&self, s: String) { self.requests.lock().unwrap().push(s) }

    /// a status writer that records each written line as "> line" in our request log, so that tests
    /// can check status output and requests are interleaved in the right order
    pub fn status_log (&self)->StatusLog<'_> { StatusLog { archive: self, buf: Vec::new() } }
}

pub struct StatusLog<'a> {
    archive: &'a StubArchive,
    buf: Vec<u8>,
}

impl Write for StatusLog<'_> {
    fn write (&mut self, bytes: &[u8])->std::io::Result<usize> {
        for b in bytes {
            if *b == b'\n' {
                let line = String::from_utf8_lossy( &self.buf).to_string();
                self.archive.record( format!("> {line}"));
                self.buf.clear();
            } else {
                self.buf.push(*b);
            }
        }
        Ok(bytes.len())
    }

    fn flush (&mut self)->std::io::Result<()> { Ok(()) }
}

#[async_trait]
impl ArchiveClient for StubArchive {
    async fn get_index (&self, url: &str)->Result<String> {
        self.record( url.to_string());
        self.indices.get(url).cloned().ok_or_else( || OdinNetError::NotFoundError(url.to_string()).into())
    }

    async fn download (&self, url: &str, path: &Path)->Result<u64> {
        self.record( url.to_string());
        if self.failing.contains(url) {
            Err( OdinNetError::OpFailed(format!("response status 500 for {url}")).into() )
        } else {
            std::fs::write( path, url.as_bytes())?;
            Ok( url.len() as u64 )
        }
    }
}
