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

//! flight data side of skyglobe: polling a ranked list of in-flight service endpoints, normalizing their
//! (two different) response schemas into [`flight_info::FlightInfo`], enriching results from a static
//! airport dataset and deriving the strings we display to passengers

use std::time::Duration;
use serde::{Serialize, Deserialize};
use skyglobe_common::{define_load_config, datetime::{deserialize_duration, serialize_duration}};

pub mod errors;
pub mod airport;
pub mod flight_info;
pub mod fetch;
pub mod pipeline;
pub mod format;
pub mod display;

pub use errors::{FlightSyncError, Result};
pub use airport::{Airport, AirportIndex, AirportKey};
pub use flight_info::{FlightInfo, FlightPayload, SchemaKind};
pub use fetch::{HttpFetcher, HttpResponse, ReqwestFetcher};
pub use pipeline::{Endpoint, FlightSyncPipeline};
pub use display::FlightDisplay;

define_load_config!{}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct FlightSyncConfig {
    /// ranked endpoints, best first
    pub endpoints: Vec<Endpoint>,

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub request_timeout: Duration,

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub poll_interval: Duration,

    /// airport dataset (JSON). Relative names are looked up as data files of this crate
    pub airports: String,

    #[serde(default)]
    pub airport_key: AirportKey,

    /// countries for which city labels omit the country
    pub domestic_countries: Vec<String>,
}
