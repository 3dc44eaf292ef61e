/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
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

use std::time::Duration;
use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer};
use parse_duration::parse;

#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }

/// this should be used wherever we might have to use a sim clock instead of wall clock
#[inline]
pub fn utc_now()->DateTime<Utc> {
    Utc::now()
}

/// 1-based ordinal day within the (Gregorian) year of the given date
pub fn day_of_year<Tz: TimeZone> (date: &DateTime<Tz>)->u32 {
    date.ordinal()
}

/// IEEE 754 remainder: `x - n*y` with `n` being `x/y` rounded to the nearest (even) integer.
/// Unlike `%` the result can be negative for positive operands and lies within [-y/2, y/2]
pub fn ieee_remainder (x: f64, y: f64)->f64 {
    x - (x / y).round_ties_even() * y
}

/// parse a timestamp string in the given fixed format that is known to be UTC but carries no offset.
/// Accepts an optional trailing 'Z' designator
pub fn parse_naive_utc (s: &str, fmt: &str)->Option<DateTime<Utc>> {
    let s = s.trim();
    let s = s.strip_suffix('Z').unwrap_or(s);
    NaiveDateTime::parse_from_str( s, fmt).ok().map( |ndt| ndt.and_utc())
}

//--- serde support for human readable durations ("30s", "1min")

pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    let dfm = format!("{:?}", dur);
    s.serialize_str(&dfm)
}
