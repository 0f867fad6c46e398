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

//! common utility functions for plain HTTP GET retrieval

use std::{fs::File, io::Write, path::Path, time::Duration};
use reqwest::{Client, StatusCode, Response};
use tracing::debug;

use crate::{define_error, fs::remove_file_if_exists};

define_error!{ pub OdinNetError =
    IOError(#[from] std::io::Error) : "IO error: {0}",
    NotFoundError(String) : "not found {0}",
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    OpFailed(String) : "operation failed: {0}"
}

pub type Result<T> = std::result::Result<T, OdinNetError>;

/// create a HTTP client with an optional per-request timeout. Without timeout requests
/// can block indefinitely
pub fn create_client (timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok( builder.build()? )
}

/// map non-OK response status values into errors
fn check_status (url: &str, response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        StatusCode::NOT_FOUND => Err( OdinNetError::NotFoundError(format!("{url}"))),
        other => Err( OdinNetError::OpFailed(format!("response status {other:?} for {url}")))
    }
}

/// retrieve the (UTF-8) text content of the given URL
pub async fn get_text (client: &Client, url: &str) -> Result<String> {
    debug!("GET {url}");
    let response = check_status( url, client.get(url).send().await?)?;
    Ok( response.text().await? )
}

/// fetch file from URL using HTTP GET method. Retrieve in chunks to support large files.
/// The file is only created once we got a OK response, and removed again if the transfer fails.
/// Note this requires a full URL
pub async fn download_url (client: &Client, url: &str, path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    debug!("GET {url} -> {path:?}");
    let mut response = check_status( url, client.get(url).send().await?)?;

    let mut file = File::create(path)?;
    let mut len: u64 = 0;

    let res = async {
        while let Some(chunk) = response.chunk().await? {
            len += chunk.len() as u64;
            file.write_all(&chunk)?;
        }
        file.flush()?;
        Ok::<(),OdinNetError>(())
    }.await;

    if let Err(e) = res {
        drop(file);
        remove_file_if_exists(path)?;
        return Err(e)
    }

    Ok(len)
}

/// get filename part (last path element) of given URL, which is everything after the last '/'.
/// Returns None if there is no '/' or the URL ends with it
pub fn url_file_name<'a> (url: &'a str) -> Option<&'a str> {
    url.rsplit_once('/')
        .map( |(_,fname)| fname)
        .filter( |fname| !fname.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_file_name() {
        let url = "https://mtarchive.geol.iastate.edu/2018/01/07/cod/sat/goes16/regional/southeast/abi13/southeast_abi13_20180107120000.png";
        assert_eq!( url_file_name(url), Some("southeast_abi13_20180107120000.png"));

        assert_eq!( url_file_name("https://mtarchive.geol.iastate.edu/2018/01/07/"), None);
        assert_eq!( url_file_name("no-path-at-all"), None);
    }
}
