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

//! the live globe session: wires the orientation engine, the marker registry and the flight sync
//! pipeline together, exposes tick and gesture entry points for the host and reports every state change
//! through a single event channel

use std::time::Duration;
use serde::{Serialize, Deserialize};
use skyglobe_common::{define_load_config, datetime::{deserialize_duration, serialize_duration}};
use skyglobe_globe::AlignmentMode;

pub mod errors;
pub mod session;

pub use errors::{SkyglobeLiveError, Result};
pub use session::{GlobeSession, PollOutcome, SessionEvent};

define_load_config!{}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct GlobeConfig {
    #[serde(default)]
    pub alignment: AlignmentMode,

    /// how often the sun position (and seasonal tilt) gets updated
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub sun_interval: Duration,

    // where to look before we have the first flight position
    pub default_lat: Option<f64>,
    pub default_lon: Option<f64>,

    pub event_capacity: usize,

    /// Wi-Fi networks on which we expect the in-flight service to be reachable
    pub allowed_ssids: Vec<String>,
}

impl GlobeConfig {
    pub fn default_focus (&self)->Option<(f64,f64)> {
        self.default_lat.zip( self.default_lon)
    }
}
