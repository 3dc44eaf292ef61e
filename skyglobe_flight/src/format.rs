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

//! derived metrics for display. These are pure functions, results only depend on their arguments

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use num_format::{Locale, ToFormattedString};

pub const KNOTS_TO_MPH: f64 = 1.15078;

/// "{h}h {m}m" with zero components left out. Non-positive input yields an empty string
pub fn format_time_to_go (minutes: i64)->String {
    if minutes <= 0 { return String::new() }

    let hours = minutes / 60;
    let mins = minutes % 60;

    match (hours, mins) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m")
    }
}

/// thousands grouped feet, fractional feet are truncated
pub fn format_altitude (feet: f64)->String {
    let ft = feet.trunc() as i64;
    format!("{} ft", ft.to_formatted_string( &Locale::en))
}

pub fn knots_to_mph (knots: f64)->i64 {
    (knots * KNOTS_TO_MPH).floor() as i64
}

pub fn format_ground_speed (knots: f64)->String {
    format!("{} mph", knots_to_mph( knots))
}

/// 12h wall clock time ("1:05 PM") of the given instant in the given IANA timezone
pub fn local_time_at (tz_id: &str, instant: &DateTime<Utc>)->Option<String> {
    let tz: Tz = tz_id.parse().ok()?;
    Some( instant.with_timezone( &tz).format("%-I:%M %p").to_string() )
}

/// domestic airports only show the city, foreign ones add the country on a second line
pub fn city_label (city: &str, country: &str, domestic_countries: &[String])->String {
    if domestic_countries.iter().any( |c| c == country) {
        city.to_string()
    } else {
        format!("{city}\n{country}")
    }
}
