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

use std::{fmt, str::FromStr};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::errors::{OdinGoesArchiveError, Result};

/// ABI band numbers (see https://www.goes-r.gov/mission/ABI-bands-quick-info.html)
pub const MIN_ABI_BAND: i64 = 1;
pub const MAX_ABI_BAND: i64 = 16;

/// multi-band RGB composites that are archived next to the single ABI bands
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,EnumString,AsRefStr,EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CompositeProduct {
    Airmass,
    Natcolor,
    Ntmicro,
    Truecolor,
}

/// the spectral channel of a query, which is either a single ABI band or a composite product.
/// The archive directory name of a channel is its [`Display`](fmt::Display) value: `abi` followed by the
/// zero-padded two digit band number (`abi13`) for bands, and the verbatim name for composites
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum Channel {
    Band(u8),
    Composite(CompositeProduct),
}

impl Channel {
    pub fn band (n: i64)->Result<Self> {
        if n >= MIN_ABI_BAND && n <= MAX_ABI_BAND {
            Ok( Channel::Band(n as u8) )
        } else {
            Err( OdinGoesArchiveError::ChannelError(format!("ABI band {n} not in [{MIN_ABI_BAND}..{MAX_ABI_BAND}]")) )
        }
    }

    /// the archive directory name of this channel
    pub fn code (&self)->String { self.to_string() }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Band(n) => write!(f, "abi{:02}", n),
            Channel::Composite(product) => write!(f, "{}", product.as_ref())
        }
    }
}

/// composite names are matched verbatim, everything else has to be an integer band number
impl FromStr for Channel {
    type Err = OdinGoesArchiveError;

    fn from_str (s: &str)->Result<Self> {
        if let Ok(product) = CompositeProduct::from_str(s) {
            return Ok( Channel::Composite(product) )
        }

        let n: i64 = s.trim().parse().map_err( |_| {
            OdinGoesArchiveError::ChannelError(format!("'{s}' is neither an ABI band number nor a composite product"))
        })?;
        Channel::band(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_band_codes() {
        assert_eq!( "13".parse::<Channel>().unwrap().code(), "abi13");
        assert_eq!( "2".parse::<Channel>().unwrap().code(), "abi02");
        assert_eq!( " 7 ".parse::<Channel>().unwrap(), Channel::Band(7));
        assert_eq!( "016".parse::<Channel>().unwrap().code(), "abi16");
    }

    #[test]
    fn test_composite_codes() {
        assert_eq!( "truecolor".parse::<Channel>().unwrap().code(), "truecolor");

        for product in CompositeProduct::iter() {
            let ch: Channel = product.as_ref().parse().unwrap();
            assert_eq!( ch, Channel::Composite(product));
            assert_eq!( ch.code(), product.as_ref());
        }
    }

    #[test]
    fn test_invalid_channels() {
        assert!( matches!( "abc".parse::<Channel>(), Err(OdinGoesArchiveError::ChannelError(_))));
        assert!( "0".parse::<Channel>().is_err());
        assert!( "17".parse::<Channel>().is_err());
        assert!( "TrueColor".parse::<Channel>().is_err());
        assert!( "".parse::<Channel>().is_err());
    }
}
