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

use std::{collections::HashMap, fmt};
use serde::{Serialize, Deserialize};
use tracing::{debug, info};
use skyglobe_common::cartesian3::Cartesian3;
use crate::geo_math::{surface_position, GLOBE_RADIUS};

pub const SUN_MARKER: &'static str = "sun_marker";
pub const ORIGIN_MARKER: &'static str = "origin_marker";
pub const DESTINATION_MARKER: &'static str = "destination_marker";
pub const AIRPLANE_MARKER: &'static str = "airplane_marker";

/// RGBA with components in [0,1]
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32
}

impl Color {
    pub const fn new (r: f32, g: f32, b: f32, a: f32)->Self { Color{r,g,b,a} }

    pub const CLEAR: Color = Color::new( 0.0, 0.0, 0.0, 0.0);
    pub const ORIGIN: Color = Color::new( 0.2, 0.8, 0.2, 1.0);
    pub const DESTINATION: Color = Color::new( 0.9, 0.2, 0.2, 1.0);
    pub const AIRPLANE: Color = Color::new( 1.0, 0.85, 0.0, 1.0);
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub enum MarkerStyle {
    Dot(Color),
    Beam(Color),
    Pulsing
}

/// a named point on (or above) the globe surface. The name is the identity
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Marker {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64, // distance from globe center in scene units
    pub style: MarkerStyle
}

impl Marker {
    pub fn new (name: impl ToString, latitude: f64, longitude: f64, altitude: f64, style: MarkerStyle)->Self {
        Marker { name: name.to_string(), latitude, longitude, altitude, style }
    }

    /// a marker that sits right on the globe surface
    pub fn on_surface (name: impl ToString, latitude: f64, longitude: f64, style: MarkerStyle)->Self {
        Marker::new( name, latitude, longitude, GLOBE_RADIUS, style)
    }

    /// scene position (before the globe transform is applied)
    pub fn position (&self)->Cartesian3 {
        surface_position( self.latitude, self.longitude, self.altitude)
    }
}

impl fmt::Display for Marker {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:.4},{:.4})", self.name, self.latitude, self.longitude)
    }
}

/// what the scene graph collaborator has to do to mirror a registry mutation
#[derive(Debug,Clone,PartialEq)]
pub enum MarkerChange {
    Added(Marker),
    Moved(Marker),
    Removed(String)
}

impl MarkerChange {
    pub fn name (&self)->&str {
        match self {
            MarkerChange::Added(m) | MarkerChange::Moved(m) => m.name.as_str(),
            MarkerChange::Removed(name) => name.as_str()
        }
    }
}

/// the set of live markers, keyed by name. There is never more than one marker per name
#[derive(Debug,Default)]
pub struct MarkerRegistry {
    markers: HashMap<String,Marker>
}

impl MarkerRegistry {
    pub fn new()->Self { MarkerRegistry { markers: HashMap::new() } }

    /// insert the marker, or move an existing marker with the same name to the new position.
    /// Moving keeps the style of the existing marker
    pub fn upsert (&mut self, marker: Marker)->MarkerChange {
        if let Some(existing) = self.markers.get_mut( &marker.name) {
            existing.latitude = marker.latitude;
            existing.longitude = marker.longitude;
            existing.altitude = marker.altitude;
            debug!("moved marker {}", existing);
            MarkerChange::Moved( existing.clone())
        } else {
            info!("added marker {}", marker);
            self.markers.insert( marker.name.clone(), marker.clone());
            MarkerChange::Added(marker)
        }
    }

    /// idempotent removal. Only reports a change if there was something to remove
    pub fn remove_by_name (&mut self, name: &str)->Option<MarkerChange> {
        self.markers.remove(name).map( |m| {
            debug!("removed marker {}", m);
            MarkerChange::Removed( m.name)
        })
    }

    /// remove-then-insert, which also replaces the style
    pub fn replace (&mut self, marker: Marker)->Vec<MarkerChange> {
        let mut changes = Vec::with_capacity(2);
        if let Some(change) = self.remove_by_name( &marker.name) {
            changes.push(change);
        }
        self.markers.insert( marker.name.clone(), marker.clone());
        changes.push( MarkerChange::Added(marker));
        changes
    }

    pub fn get (&self, name: &str)->Option<&Marker> { self.markers.get(name) }
    pub fn contains (&self, name: &str)->bool { self.markers.contains_key(name) }
    pub fn len (&self)->usize { self.markers.len() }
    pub fn is_empty (&self)->bool { self.markers.is_empty() }
    pub fn iter (&self)->impl Iterator<Item=&Marker> { self.markers.values() }
}
