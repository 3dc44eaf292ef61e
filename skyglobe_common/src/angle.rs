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

#![allow(unused)]

//! normalized angle types. Values are kept in degrees and normalized on construction

use std::{fmt, marker::PhantomData, ops};
use serde::{Serialize, Serializer, Deserialize, Deserializer};

/// fold into [-90..90] (mirrors across the poles)
#[inline]
pub fn normalize_90 (d: f64) -> f64 {
    let x = normalize_180(d);

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

/// wrap into [-180..180]
#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { x + 360.0 }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/// wrap into [0..360)
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { x + 360.0 } else { x }
}

pub trait AngleKind {
    const NAME: &'static str;
    fn normalize (v: f64)->f64;
}

#[derive(Debug,Clone,Copy)]
pub struct LatitudeKind {}
impl AngleKind for LatitudeKind {
    const NAME: &'static str = "Latitude";
    fn normalize (v: f64) -> f64 { normalize_90(v) }
}

#[derive(Debug,Clone,Copy)]
pub struct LongitudeKind {}
impl AngleKind for LongitudeKind {
    const NAME: &'static str = "Longitude";
    fn normalize (v: f64) -> f64 { normalize_180(v) }
}

#[derive(Debug,Clone,Copy)]
pub struct FullCircleKind {}
impl AngleKind for FullCircleKind {
    const NAME: &'static str = "Angle360";
    fn normalize (v: f64) -> f64 { normalize_360(v) }
}

#[derive(Copy,Clone)]
pub struct NormalizedAngle<K> where K: AngleKind {
    value: f64,
    kind: PhantomData<K>,
}

impl<K> NormalizedAngle<K> where K: AngleKind {
    #[inline]
    pub fn from_degrees (deg: f64) -> Self {
        NormalizedAngle { value: K::normalize(deg), kind: PhantomData }
    }

    #[inline]
    pub fn from_radians (rad: f64) -> Self {
        Self::from_degrees( rad.to_degrees())
    }

    #[inline] pub fn degrees (&self)->f64 { self.value }
    #[inline] pub fn radians (&self)->f64 { self.value.to_radians() }

    #[inline] pub fn sin (&self)->f64 { self.radians().sin() }
    #[inline] pub fn cos (&self)->f64 { self.radians().cos() }
}

pub type Latitude = NormalizedAngle<LatitudeKind>;
pub type Longitude = NormalizedAngle<LongitudeKind>;
pub type Angle360 = NormalizedAngle<FullCircleKind>;

impl<K> fmt::Display for NormalizedAngle<K> where K: AngleKind {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}°", self.value) }
}

impl<K> fmt::Debug for NormalizedAngle<K> where K: AngleKind {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}({})", K::NAME, self.value) }
}

impl<K> PartialEq for NormalizedAngle<K> where K: AngleKind {
    fn eq (&self, other: &Self) -> bool { self.value == other.value }
}

impl<K> PartialOrd for NormalizedAngle<K> where K: AngleKind {
    fn partial_cmp (&self, other: &Self) -> Option<std::cmp::Ordering> { self.value.partial_cmp( &other.value) }
}

// addition and subtraction only with the same kind, result is re-normalized
impl<K> ops::Add for NormalizedAngle<K> where K: AngleKind {
    type Output = Self;
    fn add (self, rhs: Self) -> Self { Self::from_degrees( self.value + rhs.value) }
}

impl<K> ops::Sub for NormalizedAngle<K> where K: AngleKind {
    type Output = Self;
    fn sub (self, rhs: Self) -> Self { Self::from_degrees( self.value - rhs.value) }
}

impl<K> From<NormalizedAngle<K>> for f64 where K: AngleKind {
    fn from (a: NormalizedAngle<K>) -> Self { a.value }
}

//--- serde support (plain degree numbers)

impl<K> Serialize for NormalizedAngle<K> where K: AngleKind {
    fn serialize<S> (&self, s: S) -> Result<S::Ok, S::Error> where S: Serializer {
        s.serialize_f64( self.value)
    }
}

impl<'de,K> Deserialize<'de> for NormalizedAngle<K> where K: AngleKind {
    fn deserialize<D> (d: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let deg = f64::deserialize(d)?;
        Ok( Self::from_degrees(deg) )
    }
}
