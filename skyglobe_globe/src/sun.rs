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

//! sun position. We only need this for lighting and the sun beam marker, hence a standard low-cost
//! approximation (mean longitude/anomaly -> ecliptic longitude -> RA/dec -> subsolar point via GMST)
//! is good enough. Accuracy is about a degree for dates within a few centuries of J2000

use chrono::{DateTime, TimeZone, Utc};
use skyglobe_common::{
    angle::{normalize_180, normalize_360}, cartesian3::Cartesian3, asin, atan2, cos, deg, rad, sin
};
use crate::{
    geo_math::{lat_lon_to_unit, LatLon, DISTANCE_TO_SUN, GLOBE_RADIUS},
    markers::{Color, Marker, MarkerStyle, SUN_MARKER}
};

const UNIX_EPOCH_JD: f64 = 2440587.5;
const J2000_JD: f64 = 2451545.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub fn julian_day<Tz: TimeZone> (date: &DateTime<Tz>)->f64 {
    UNIX_EPOCH_JD + date.timestamp_millis() as f64 / MILLIS_PER_DAY
}

/// the point on earth where the sun is in zenith at the given time
pub fn subsolar_point<Tz: TimeZone> (date: &DateTime<Tz>)->LatLon {
    let jd = julian_day(date);
    let n = jd - J2000_JD; // days since J2000
    let t = n / 36525.0;   // centuries since J2000

    let l = normalize_360( 280.46 + 0.9856474 * n); // mean longitude
    let g = normalize_360( 357.528 + 0.9856003 * n); // mean anomaly

    let lambda = rad( normalize_360( l + 1.915 * sin(rad(g)) + 0.020 * sin(rad(2.0 * g)))); // ecliptic longitude
    let eps = rad( 23.439 - 0.0000004 * n); // obliquity of the ecliptic

    let alpha = normalize_360( deg( atan2( cos(eps) * sin(lambda), cos(lambda))));
    let delta = deg( asin( sin(eps) * sin(lambda)));

    let gmst = normalize_360( 280.46061837 + 360.98564736629 * n + 0.000387933 * t * t - t * t * t / 38710000.0);

    LatLon::new( delta, normalize_180( alpha - gmst))
}

/// where to put the sun related scene objects
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct SunPlacement {
    pub subsolar: LatLon,
    pub light_position: Cartesian3, // directional light looks from here at the globe center
}

impl SunPlacement {
    pub fn at<Tz: TimeZone> (date: &DateTime<Tz>)->Self {
        let subsolar = subsolar_point(date);
        let light_position = subsolar.to_unit() * DISTANCE_TO_SUN;
        SunPlacement { subsolar, light_position }
    }

    pub fn marker (&self)->Marker {
        Marker::new( SUN_MARKER, self.subsolar.lat, self.subsolar.lon, GLOBE_RADIUS, MarkerStyle::Beam(Color::CLEAR))
    }
}

/// the sun beam marker for the given time
pub fn sun_marker<Tz: TimeZone> (date: &DateTime<Tz>)->Marker {
    SunPlacement::at(date).marker()
}
