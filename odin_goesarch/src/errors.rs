/*
 * Copyright (c) 2024, United States Government, as represented by the
 * Administrator of the National Aeronautics and Space Administration.
 * All rights reserved.
 *
 * The ODIN - Open Data Integration Framework is licensed under the
 * Apache License, Version 2.0 (the "License"); you may not use this file
 * except in compliance with the License. You may obtain a copy of the
 * License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use odin_common::{define_error, net::OdinNetError};

pub type Result<T> = std::result::Result<T, OdinGoesArchiveError>;

define_error!{ pub OdinGoesArchiveError =
    IOError( #[from] std::io::Error ) : "IO error {0}",
    NetError( #[from] OdinNetError ) : "net error {0}",
    DateParseError( String ) : "date parse error {0}",
    ChannelError( String ) : "invalid channel {0}",
    RegionError( String ) : "invalid region {0}",
    IndexEntryError( String ) : "malformed index entry {0}",
    ConfigParseError( String ) : "config parse error {0}"
}

pub fn date_parse_error (msg: impl ToString)->OdinGoesArchiveError {
    OdinGoesArchiveError::DateParseError(msg.to_string())
}

pub fn index_entry_error (msg: impl ToString)->OdinGoesArchiveError {
    OdinGoesArchiveError::IndexEntryError(msg.to_string())
}
