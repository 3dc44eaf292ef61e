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
use chrono::{DateTime, Utc};
use serde::Serialize;
use skyglobe_common::is_none;
use crate::{
    airport::Airport,
    flight_info::FlightInfo,
    format::{city_label, format_altitude, format_ground_speed, format_time_to_go, local_time_at}
};

const NOT_AVAILABLE: &'static str = "N/A";

/// the passenger facing strings derived from the last successful poll
#[derive(Debug,Clone,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct FlightDisplay {
    pub time_at_origin: String,
    pub origin_city: String,
    pub time_at_destination: String,
    pub destination_city: String,
    pub time_to_go: String,
    pub ground_speed: String,
    pub altitude: String,
    pub flight_number: String,

    #[serde(skip_serializing_if="is_none")]
    pub last_error: Option<String>,
}

impl Default for FlightDisplay {
    fn default()->Self {
        FlightDisplay {
            time_at_origin: NOT_AVAILABLE.to_string(),
            origin_city: "Origin".to_string(),
            time_at_destination: NOT_AVAILABLE.to_string(),
            destination_city: "Destination".to_string(),
            time_to_go: NOT_AVAILABLE.to_string(),
            ground_speed: NOT_AVAILABLE.to_string(),
            altitude: NOT_AVAILABLE.to_string(),
            flight_number: NOT_AVAILABLE.to_string(),
            last_error: None
        }
    }
}

impl FlightDisplay {
    /// update from a new flight info. Airport related fields keep their previous value if the respective
    /// airport (or its timezone) is unknown
    pub fn update (&mut self, info: &FlightInfo, now: &DateTime<Utc>, domestic_countries: &[String]) {
        self.time_to_go = format_time_to_go( info.time_to_go);

        if let Some(airport) = &info.origin_airport {
            update_airport_fields( airport, now, domestic_countries, &mut self.time_at_origin, &mut self.origin_city);
        }
        if let Some(airport) = &info.destination_airport {
            update_airport_fields( airport, now, domestic_countries, &mut self.time_at_destination, &mut self.destination_city);
        }

        self.altitude = format_altitude( info.altitude);
        self.ground_speed = format_ground_speed( info.groundspeed);
        self.flight_number = info.flight_number.clone();
        self.last_error = None;
    }

    /// a failed poll only records the error, everything else stays as it was
    pub fn set_error (&mut self, msg: impl ToString) {
        self.last_error = Some( msg.to_string());
    }
}

fn update_airport_fields (airport: &Airport, now: &DateTime<Utc>, domestic_countries: &[String], time: &mut String, city: &mut String) {
    if let Some(t) = local_time_at( &airport.tz, now) {
        *time = t;
    }
    *city = city_label( &airport.city, &airport.country, domestic_countries);
}

impl fmt::Display for FlightDisplay {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = self.origin_city.replace('\n', ", ");
        let destination = self.destination_city.replace('\n', ", ");
        write!(f, "{}: {} ({}) -> {} ({}), to go: {}, {}, {}",
            self.flight_number, origin, self.time_at_origin, destination, self.time_at_destination,
            self.time_to_go, self.ground_speed, self.altitude)?;
        if let Some(err) = &self.last_error {
            write!(f, " [{err}]")?;
        }
        Ok(())
    }
}
