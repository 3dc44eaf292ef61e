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

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};
use nalgebra::Vector3;
use serde::{Serialize,Deserialize};

/// a plain 3D vector in scene (globe) coordinates. Units are abstract (globe radius based), we
/// only convert to nalgebra types where we need rotations

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64
}

impl Cartesian3 {
    pub fn new (x: f64, y: f64, z: f64)->Cartesian3 {
        Cartesian3{x,y,z}
    }

    pub fn zero ()->Cartesian3 {
        Cartesian3{x: 0.0, y: 0.0, z: 0.0}
    }

    pub fn cross (&self, p: &Cartesian3)->Self {
        Cartesian3 {
            x: (self.y * p.z) - (self.z * p.y),
            y: (self.z * p.x) - (self.x * p.z),
            z: (self.x * p.y) - (self.y * p.x)
        }
    }

    pub fn dot (&self, p: &Cartesian3) -> f64 {
        (self.x * p.x) + (self.y * p.y) + (self.z * p.z)
    }

    pub fn length (&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// return unit length vector with same direction. The zero vector stays zero
    pub fn normalized (&self)->Self {
        let len = self.length();
        if len > 0.0 { *self * (1.0/len) } else { *self }
    }

    /// return vector with same direction and given length
    pub fn with_length (&self, len: f64)->Self {
        self.normalized() * len
    }

    pub fn distance_to (&self, p: &Cartesian3)->f64 {
        (*p - *self).length()
    }

    /// approximate equality with absolute tolerance per component
    pub fn approx_eq (&self, p: &Cartesian3, eps: f64)->bool {
        (self.x - p.x).abs() <= eps && (self.y - p.y).abs() <= eps && (self.z - p.z).abs() <= eps
    }

    pub fn to_vector3 (&self)->Vector3<f64> {
        Vector3::new( self.x, self.y, self.z)
    }
}

impl std::fmt::Display for Cartesian3 {
    fn fmt (&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ {:.4}, {:.4}, {:.4} ]", self.x, self.y, self.z)
    }
}

impl From<Vector3<f64>> for Cartesian3 {
    fn from (v: Vector3<f64>)->Self { Cartesian3::new( v.x, v.y, v.z) }
}

impl From<Cartesian3> for Vector3<f64> {
    fn from (p: Cartesian3)->Self { p.to_vector3() }
}

impl Add for Cartesian3 {
    type Output = Self;

    fn add (self, rhs: Self) -> Self {
        Cartesian3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl AddAssign for Cartesian3 {
    fn add_assign (&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Cartesian3 {
    type Output = Self;

    fn sub (self, rhs: Self) -> Self {
        Cartesian3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl Neg for Cartesian3 {
    type Output = Self;

    fn neg (self) -> Self {
        Cartesian3 { x: -self.x, y: -self.y, z: -self.z }
    }
}

impl Mul<f64> for Cartesian3 {
    type Output = Self;

    fn mul (self, rhs: f64) -> Self {
        Cartesian3 { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

impl MulAssign<f64> for Cartesian3 {
    fn mul_assign (&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}
