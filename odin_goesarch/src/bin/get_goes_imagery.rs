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

//! command line tool to download archived GOES-16 regional imagery for a given time window and channel, e.g.
//! ```text
//!   get_goes_imagery -s 2018-01-07/12 -e 2018-01-07/18 -c 13 -r southeast
//! ```
//! downloads all 'abi13' images of the southeast sector between 12:00 and 18:00 UTC. Without `-r` the
//! configured default region (northcentral) is used.
//!
//! Failed downloads do not abort the run, they are reported in a summary at the end.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use odin_common::{check_cli, define_cli, fs::ensure_writable_dir};
use odin_goesarch::{load_config, CalendarEnumeration, Fetcher, GoesArchiveConfig, HttpArchiveClient, IndexResolver, Query};

define_cli! { ARGS [about="GOES-16 regional imagery archive download tool"] =
    start: String              [help="start of time window (UTC, YYYY-mm-dd/HH)", short, long],
    end: String                [help="end of time window (UTC, YYYY-mm-dd/HH)", short, long],
    channel: String            [help="ABI band 1..16 or one of airmass, natcolor, ntmicro, truecolor", short, long],
    region: Option<String>     [help="[OPTIONAL] gulf, northcentral, northeast, northmexico, northwest, prregional, southcentral, southeast, southmexico, southwest", short, long],
    output_dir: Option<String> [help="directory to store downloaded images (overrides config)", short, long],
    config: Option<String>     [help="pathname of GoesArchiveConfig (RON) file", long],
    timeout: Option<String>    [help="per request timeout, e.g. 30s (overrides config)", long],
    list_only: bool            [help="only list matching image URLs, do not download", long],
    legacy_enumeration: bool   [help="scan all year/month/day combinations of the time window instead of actual days", long]
}

#[tokio::main]
async fn main()->Result<()> {
    check_cli!(ARGS);

    // note this only succeeds if there is no global subscriber set yet
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .try_init();

    let config = get_config()?;
    let client = HttpArchiveClient::new( config.timeout)?;

    let query = Query::parse( &ARGS.start, &ARGS.end, &ARGS.channel, ARGS.region.as_deref(), config.default_region)?;
    let resolver = IndexResolver::new( &client, &config);
    let files = resolver.resolve( &query).await?;

    if ARGS.list_only {
        for url in &files { println!("{url}") }
        println!("{} matching files", files.len());
        return Ok(())
    }

    ensure_writable_dir( &config.download_dir)?;
    let fetcher = Fetcher::new( &client, &config.download_dir);
    let report = fetcher.fetch( &files).await;

    println!("downloaded {} of {} files ({} bytes) to {:?}", report.n_downloaded(), report.attempted, report.n_bytes(), fetcher.download_dir());
    if !report.is_complete() {
        println!("{} files failed:", report.n_failed());
        for f in &report.failed {
            println!("  {}: {}", f.url, f.reason);
        }
    }

    Ok(())
}

/// the config file (or defaults) with command line overrides applied
fn get_config()->Result<GoesArchiveConfig> {
    let mut config = match &ARGS.config {
        Some(path) => load_config( path)?,
        None => GoesArchiveConfig::default()
    };

    if let Some(dir) = &ARGS.output_dir {
        config.download_dir = dir.into();
    }
    if let Some(timeout) = &ARGS.timeout {
        config.timeout = Some( parse_duration::parse( timeout).map_err( |e| anyhow!("invalid timeout '{timeout}': {e:?}"))?);
    }
    if ARGS.legacy_enumeration {
        config.enumeration = CalendarEnumeration::CartesianProduct;
    }

    Ok(config)
}
