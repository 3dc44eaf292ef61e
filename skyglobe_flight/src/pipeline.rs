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

use std::{fmt, sync::Arc};
use serde::{Serialize, Deserialize};
use tracing::{debug, info, warn};
use crate::{
    airport::AirportIndex,
    errors::{airport_data_error, fetch_error, FlightSyncError, Result},
    fetch::HttpFetcher,
    flight_info::{FlightInfo, FlightPayload, SchemaKind},
    FlightSyncConfig
};

/// a candidate flight data source and the response schema it delivers
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Endpoint {
    pub url: String,
    pub schema: SchemaKind
}

impl Endpoint {
    pub fn new (url: impl ToString, schema: SchemaKind)->Self {
        Endpoint { url: url.to_string(), schema }
    }
}

impl fmt::Display for Endpoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.url, self.schema)
    }
}

/// polls a ranked list of endpoints for the current flight state.
///
/// The pipeline sticks to the first endpoint that answered with HTTP 200 until a poll through it fails.
/// Then it forgets about it and runs discovery over the whole ranking again on the next poll - we never
/// switch endpoints within the same poll cycle. Successful results are enriched with origin and
/// destination airports from the static airport index.
///
/// The pipeline is not re-entrant: `fetch_flight_info` takes `&mut self`, hence callers that poll from
/// timers have to serialize (or drop) overlapping ticks themselves
pub struct FlightSyncPipeline {
    endpoints: Vec<Endpoint>, // ranked, best first
    active: Option<usize>,
    fetcher: Arc<dyn HttpFetcher>,
    airports: Arc<AirportIndex>,
}

impl FlightSyncPipeline {
    pub fn new (endpoints: Vec<Endpoint>, fetcher: Arc<dyn HttpFetcher>, airports: Arc<AirportIndex>)->Self {
        FlightSyncPipeline { endpoints, active: None, fetcher, airports }
    }

    /// create from config. The airport dataset is resolved as a data file of this crate, failure to load
    /// it results in an empty index
    pub fn from_config (config: &FlightSyncConfig, fetcher: Arc<dyn HttpFetcher>)->Self {
        let airports = match crate::data_file( &config.airports) {
            Ok(path) => AirportIndex::load_or_empty( config.airport_key, &path),
            Err(e) => {
                warn!("airport dataset not found: {e}");
                AirportIndex::new( config.airport_key)
            }
        };
        Self::new( config.endpoints.clone(), fetcher, Arc::new(airports))
    }

    pub fn endpoints (&self)->&[Endpoint] { &self.endpoints }
    pub fn active_endpoint (&self)->Option<&Endpoint> { self.active.map( |i| &self.endpoints[i]) }
    pub fn airports (&self)->&AirportIndex { &self.airports }

    /// probe all endpoints in rank order. The first 200 response becomes the active endpoint and its body
    /// is handed back so that the caller does not have to fetch again
    async fn discover (&mut self)->Result<(usize,Vec<u8>)> {
        self.active = None;

        for (i,endpoint) in self.endpoints.iter().enumerate() {
            match self.fetcher.get( &endpoint.url).await {
                Ok(response) if response.is_ok() => {
                    info!("active flight data endpoint: {endpoint}");
                    self.active = Some(i);
                    return Ok( (i, response.body) )
                }
                Ok(response) => debug!("endpoint {} returned status {}", endpoint.url, response.status),
                Err(e) => debug!("endpoint {} not reachable: {e}", endpoint.url),
            }
        }

        warn!("none of {} flight data endpoints responded", self.endpoints.len());
        Err( FlightSyncError::ServiceDown )
    }

    /// GET the active endpoint. Any failure clears the active endpoint
    async fn poll_active (&mut self, idx: usize)->Result<Vec<u8>> {
        let url = self.endpoints[idx].url.as_str();

        match self.fetcher.get( url).await {
            Ok(response) if response.is_ok() => Ok( response.body ),
            Ok(response) => {
                warn!("lost flight data endpoint {url}: status {}", response.status);
                let err = fetch_error!("{} returned status {}", url, response.status);
                self.active = None;
                Err(err)
            }
            Err(e) => {
                warn!("lost flight data endpoint {url}: {e}");
                self.active = None;
                Err(e)
            }
        }
    }

    /// one poll cycle: discover if needed, fetch, decode according to the endpoint schema, normalize and
    /// enrich with airports. Without airport data we do not even try
    pub async fn fetch_flight_info (&mut self)->Result<FlightInfo> {
        if self.airports.is_empty() {
            return Err( airport_data_error!("airport index is empty"))
        }

        let (idx, body) = match self.active {
            Some(idx) => (idx, self.poll_active( idx).await?),
            None => self.discover().await?
        };

        let schema = self.endpoints[idx].schema;
        let mut info = FlightPayload::decode( schema, &body)?.into_flight_info( self.airports.key())?;
        self.enrich( &mut info);
        debug!("flight {} at ({:.4},{:.4})", info.flight_number, info.latitude, info.longitude);

        Ok(info)
    }

    /// join origin/destination codes with the airport index. Misses just leave the airport unset
    pub fn enrich (&self, info: &mut FlightInfo) {
        info.origin_airport = self.airports.get( &info.origin);
        info.destination_airport = self.airports.get( &info.destination);
    }
}
