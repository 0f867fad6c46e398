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

use std::{path::Path, time::Duration};
use async_trait::async_trait;
use reqwest::Client;
use odin_common::net::{create_client, download_url, get_text};

use crate::errors::Result;

/// the abstract archive access used by [`crate::IndexResolver`] and [`crate::Fetcher`].
/// Implementations have to map non-success responses into errors
#[async_trait]
pub trait ArchiveClient: Send + Sync {
    /// retrieve the text of an index document
    async fn get_index (&self, url: &str)->Result<String>;

    /// retrieve a file and store it under the given path, returning the number of bytes written
    async fn download (&self, url: &str, path: &Path)->Result<u64>;
}

#[async_trait]
impl<T: ArchiveClient> ArchiveClient for &T {
    async fn get_index (&self, url: &str)->Result<String> {
        (**self).get_index(url).await
    }

    async fn download (&self, url: &str, path: &Path)->Result<u64> {
        (**self).download( url, path).await
    }
}

/// the plain HTTP(S) GET based archive client
#[derive(Debug,Clone)]
pub struct HttpArchiveClient {
    client: Client,
}

impl HttpArchiveClient {
    pub fn new (timeout: Option<Duration>)->Result<Self> {
        let client = create_client( timeout)?;
        Ok( HttpArchiveClient { client } )
    }
}

#[async_trait]
impl ArchiveClient for HttpArchiveClient {
    async fn get_index (&self, url: &str)->Result<String> {
        Ok( get_text( &self.client, url).await? )
    }

    async fn download (&self, url: &str, path: &Path)->Result<u64> {
        Ok( download_url( &self.client, url, path).await? )
    }
}
