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

use std::{collections::HashMap, fs, path::Path, sync::Arc};
use serde::{Serialize, Deserialize};
use tracing::{debug, info, warn};
use crate::errors::{airport_data_error, Result};

/// static airport record as it comes from the bundled dataset
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="PascalCase")]
pub struct Airport {
    pub city: String,
    pub country: String,
    #[serde(rename="IATA")]
    pub iata: String,
    #[serde(rename="ICAO")]
    pub icao: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64, // feet
    #[serde(rename="TZ")]
    pub tz: String, // IANA timezone id
}

/// which airport code the flight data origin/destination fields are joined on
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
pub enum AirportKey {
    #[default]
    Icao,
    Iata
}

impl AirportKey {
    pub fn code_of<'a> (&self, airport: &'a Airport)->&'a str {
        match self {
            AirportKey::Icao => airport.icao.as_str(),
            AirportKey::Iata => airport.iata.as_str(),
        }
    }
}

// the dataset uses "\N" for unknown codes
fn is_valid_code (code: &str)->bool {
    !code.is_empty() && code != "\\N"
}

/// read-only code -> airport lookup. If the dataset has duplicate codes the first record wins
#[derive(Debug,Default)]
pub struct AirportIndex {
    key: AirportKey,
    airports: HashMap<String,Arc<Airport>>
}

impl AirportIndex {
    pub fn new (key: AirportKey)->Self {
        AirportIndex { key, airports: HashMap::new() }
    }

    pub fn from_airports (key: AirportKey, airports: Vec<Airport>)->Self {
        let mut map: HashMap<String,Arc<Airport>> = HashMap::with_capacity( airports.len());
        for airport in airports.into_iter() {
            let code = key.code_of( &airport);
            if is_valid_code( code) {
                map.entry( code.to_string()).or_insert_with( || Arc::new(airport));
            }
        }
        AirportIndex { key, airports: map }
    }

    pub fn from_json (key: AirportKey, data: &[u8])->Result<Self> {
        let airports: Vec<Airport> = serde_json::from_slice( data)
            .map_err( |e| airport_data_error!("invalid airport dataset: {e}"))?;
        Ok( Self::from_airports( key, airports) )
    }

    pub fn load (key: AirportKey, path: impl AsRef<Path>)->Result<Self> {
        let path = path.as_ref();
        let data = fs::read( path).map_err( |e| airport_data_error!("cannot read {path:?}: {e}"))?;
        let index = Self::from_json( key, data.as_slice())?;
        info!("loaded {} airports from {:?}", index.len(), path);
        Ok(index)
    }

    /// a load failure is not fatal. We keep running with an empty index, which makes every poll
    /// fail with AirportDataError until the process is restarted
    pub fn load_or_empty (key: AirportKey, path: impl AsRef<Path>)->Self {
        match Self::load( key, path) {
            Ok(index) => index,
            Err(e) => {
                warn!("{e}");
                AirportIndex::new( key)
            }
        }
    }

    pub fn key (&self)->AirportKey { self.key }

    pub fn get (&self, code: &str)->Option<Arc<Airport>> {
        let airport = self.airports.get( code).cloned();
        if airport.is_none() { debug!("no airport for code {code:?}") }
        airport
    }

    pub fn len (&self)->usize { self.airports.len() }
    pub fn is_empty (&self)->bool { self.airports.is_empty() }
}
