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

use std::sync::Arc;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use tracing::warn;
use skyglobe_common::{angle::Angle360, datetime::parse_naive_utc, is_none};
use crate::{
    airport::{Airport, AirportKey},
    errors::{fetch_error, Result}
};

/// format of the `utcTime` field in nested responses
pub const NESTED_UTC_TIME_FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S";

/// the normalized flight state all schemas converge to
#[derive(Debug,Clone,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct FlightInfo {
    pub timestamp: DateTime<Utc>,
    pub flight_number: String,
    pub vehicle_id: String,
    pub origin: String,       // airport code
    pub destination: String,  // airport code
    pub latitude: f64,
    pub longitude: f64,
    pub groundspeed: f64,     // knots
    pub altitude: f64,        // feet
    pub heading: Angle360,
    pub time_to_go: i64,      // minutes

    #[serde(skip_serializing_if="is_none")]
    pub airspeed: Option<f64>,
    #[serde(skip_serializing_if="is_none")]
    pub distance_to_go: Option<f64>,
    #[serde(skip_serializing_if="is_none")]
    pub eta: Option<f64>,

    // filled in by airport enrichment
    #[serde(skip_serializing_if="is_none")]
    pub origin_airport: Option<Arc<Airport>>,
    #[serde(skip_serializing_if="is_none")]
    pub destination_airport: Option<Arc<Airport>>,
}

/// which response shape an endpoint delivers
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum SchemaKind {
    Flat,
    Nested
}

/* #region flat schema ************************************************************************/

#[derive(Debug,Clone,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct FlatFlightInfo {
    pub timestamp: DateTime<Utc>,
    pub flight_number: String,
    pub vehicle_id: String,
    pub origin: String,
    pub destination: String,
    pub latitude: f64,
    pub longitude: f64,
    pub groundspeed: f64,
    pub altitude: f64,
    pub heading: Angle360,
    pub time_to_go: i64,

    pub eta: Option<f64>,
    pub airspeed: Option<f64>,
    pub distance_to_go: Option<f64>,
}

impl From<FlatFlightInfo> for FlightInfo {
    fn from (f: FlatFlightInfo)->Self {
        FlightInfo {
            timestamp: f.timestamp,
            flight_number: f.flight_number,
            vehicle_id: f.vehicle_id,
            origin: f.origin,
            destination: f.destination,
            latitude: f.latitude,
            longitude: f.longitude,
            groundspeed: f.groundspeed,
            altitude: f.altitude,
            heading: f.heading,
            time_to_go: f.time_to_go,
            airspeed: f.airspeed,
            distance_to_go: f.distance_to_go,
            eta: f.eta,
            origin_airport: None,
            destination_airport: None
        }
    }
}

/* #endregion flat schema */

/* #region nested schema **********************************************************************/

#[derive(Debug,Clone,Deserialize)]
pub struct NestedFlightResponse {
    #[serde(rename="Response")]
    pub response: NestedResponse
}

#[derive(Debug,Clone,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct NestedResponse {
    pub flight_info: NestedFlightInfo,
    pub system_info: Option<NestedSystemInfo>,
}

#[derive(Debug,Clone,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct NestedFlightInfo {
    pub tail_number: String,
    pub flight_number_info: String,
    pub departure_airport_code: String,
    pub destination_airport_code: String,
    pub departure_airport_code_iata: Option<String>,
    pub destination_airport_code_iata: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: f64,
    #[serde(default)]
    pub hspeed: f64,
    pub utc_time: String,
}

#[derive(Debug,Clone,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct NestedSystemInfo {
    #[serde(default)]
    pub time_to_land: i64,
}

impl NestedFlightResponse {
    /// map the nested fields onto the normalized flight info. Missing numeric fields default to zero
    /// (or None for the optional ones), only an unparsable `utcTime` is an error
    pub fn into_flight_info (self, key: AirportKey)->Result<FlightInfo> {
        let fi = self.response.flight_info;
        let time_to_go = self.response.system_info.map( |si| si.time_to_land).unwrap_or(0);

        let timestamp = parse_naive_utc( &fi.utc_time, NESTED_UTC_TIME_FORMAT)
            .ok_or_else( || fetch_error!("invalid utcTime {:?}", fi.utc_time))?;

        let (origin, destination) = match key {
            AirportKey::Iata => (
                fi.departure_airport_code_iata.unwrap_or( fi.departure_airport_code),
                fi.destination_airport_code_iata.unwrap_or( fi.destination_airport_code)
            ),
            AirportKey::Icao => (fi.departure_airport_code, fi.destination_airport_code)
        };

        Ok( FlightInfo {
            timestamp,
            flight_number: fi.flight_number_info,
            vehicle_id: fi.tail_number,
            origin,
            destination,
            latitude: fi.latitude,
            longitude: fi.longitude,
            groundspeed: fi.hspeed,
            altitude: fi.altitude,
            heading: Angle360::from_degrees(0.0),
            time_to_go,
            airspeed: None,
            distance_to_go: None,
            eta: None,
            origin_airport: None,
            destination_airport: None
        })
    }
}

/* #endregion nested schema */

/// the decode boundary. Which variant we get is determined by the endpoint that delivered the body
#[derive(Debug,Clone)]
pub enum FlightPayload {
    Flat(FlatFlightInfo),
    Nested(NestedFlightResponse)
}

impl FlightPayload {
    pub fn decode (schema: SchemaKind, data: &[u8])->Result<Self> {
        let res = match schema {
            SchemaKind::Flat => serde_json::from_slice::<FlatFlightInfo>( data).map( FlightPayload::Flat),
            SchemaKind::Nested => serde_json::from_slice::<NestedFlightResponse>( data).map( FlightPayload::Nested),
        };

        res.map_err( |e| {
            warn!("failed to decode {schema:?} flight data: {e}");
            fetch_error!("invalid {:?} flight data: {}", schema, e)
        })
    }

    pub fn into_flight_info (self, key: AirportKey)->Result<FlightInfo> {
        match self {
            FlightPayload::Flat(f) => Ok( f.into() ),
            FlightPayload::Nested(n) => n.into_flight_info( key)
        }
    }
}
