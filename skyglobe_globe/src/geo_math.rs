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

use std::fmt;
use chrono::{DateTime, TimeZone};
use serde::{Serialize, Deserialize};
use skyglobe_common::{
    angle::{normalize_180, normalize_90}, cartesian3::Cartesian3, datetime::{day_of_year, ieee_remainder},
    cos, sin, asin, atan2, rad, deg, TWO_PI
};

/// globe radius in scene units
pub const GLOBE_RADIUS: f64 = 0.5;

/// distance of the camera above the globe surface (scene units)
pub const CAMERA_ALTITUDE: f64 = 2.2;

/// distance at which the directional sun light is placed (scene units)
pub const DISTANCE_TO_SUN: f64 = 300.0;

// field of view limits in degrees (smaller is more zoomed in)
pub const DEFAULT_FOV: f64 = 40.0;
pub const MIN_FOV: f64 = 4.0;
pub const MAX_FOV: f64 = 60.0;

/// amount of rotation (degrees) for one edge-to-edge swipe at max fov
pub const DRAG_WIDTH_DEGREES: f64 = 180.0;

pub const AXIAL_TILT_DEGREES: f64 = 23.5;
pub const DAYS_IN_YEAR: f64 = 365.0;

/// days between the winter solstice (~Dec 21) and the end of the year
pub const DAYS_AFTER_WINTER_SOLSTICE: f64 = 10.0;

/// a geographic position in degrees
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64
}

impl LatLon {
    pub fn new (lat: f64, lon: f64)->Self { LatLon{lat,lon} }

    pub fn to_unit (&self)->Cartesian3 { lat_lon_to_unit( self.lat, self.lon) }
}

impl fmt::Display for LatLon {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4},{:.4})", self.lat, self.lon)
    }
}

/// unit sphere position for given latitude/longitude (degrees).
/// Scene coordinates are Y-up and right handed: lat/lon 0 is on +Z, 90°E on +X and the north pole on +Y
pub fn lat_lon_to_unit (lat: f64, lon: f64)->Cartesian3 {
    let φ = rad(lat);
    let λ = rad(lon);
    let cos_φ = cos(φ);

    Cartesian3::new( cos_φ * sin(λ), sin(φ), cos_φ * cos(λ))
}

/// inverse of [`lat_lon_to_unit`]. The vector does not need to be normalized
pub fn unit_to_lat_lon (p: &Cartesian3)->LatLon {
    let u = p.normalized();
    let lat = deg( asin( u.y.clamp(-1.0, 1.0)));
    let lon = deg( atan2( u.x, u.z));

    LatLon::new( normalize_90(lat), normalize_180(lon))
}

/// scene position of a point at given altitude (distance from globe center, in scene units)
pub fn surface_position (lat: f64, lon: f64, altitude: f64)->Cartesian3 {
    lat_lon_to_unit( lat, lon) * altitude
}

/// clamp into [MIN_FOV,MAX_FOV]. NaN input yields the default fov
pub fn clamp_fov (fov: f64)->f64 {
    if fov.is_nan() { DEFAULT_FOV } else { fov.clamp( MIN_FOV, MAX_FOV) }
}

/// where the fov sits within [MIN_FOV,MAX_FOV], as a value in [0,1]
pub fn fov_proportion (fov: f64)->f64 {
    (fov - MIN_FOV) / (MAX_FOV - MIN_FOV)
}

/// angle (radians) to tilt the globe for the season of the given date. This is a simple cosine over the
/// day of year that is extremal at the winter/summer solstice and zero at the equinoxes
pub fn compute_seasonal_tilt<Tz: TimeZone> (date: &DateTime<Tz>)->f64 {
    let day = day_of_year(date) as f64;
    let days_since_winter_solstice = ieee_remainder( day + DAYS_AFTER_WINTER_SOLSTICE, DAYS_IN_YEAR);
    let a = days_since_winter_solstice * TWO_PI / DAYS_IN_YEAR;

    -cos(a) * rad(AXIAL_TILT_DEGREES)
}
