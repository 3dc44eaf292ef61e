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

use thiserror::Error;

pub type Result<T> = std::result::Result<T,FlightSyncError>;

/// the coarse error taxonomy callers of the flight sync pipeline see. Underlying causes (transport,
/// JSON decoding, timestamp parsing, IO) are logged where they happen and only survive as message text.
/// All of these are recoverable - the next poll starts over
#[derive(Error,Debug,Clone,PartialEq)]
pub enum FlightSyncError {
    #[error("no endpoint responded")]
    ServiceDown,

    #[error("failed to fetch flight data: {0}")]
    FetchFlightDataError(String),

    #[error("airport data not available: {0}")]
    AirportDataError(String),

    #[error("not connected to an in-flight Wi-Fi network")]
    WifiSsidError,
}

impl FlightSyncError {
    /// the text we show to passengers
    pub fn user_message (&self)->&'static str {
        match self {
            FlightSyncError::ServiceDown => "The in-flight service is not responding. Trying again shortly.",
            FlightSyncError::FetchFlightDataError(_) => "Flight data could not be retrieved.",
            FlightSyncError::AirportDataError(_) => "Airport data is not available.",
            FlightSyncError::WifiSsidError => "Connect to the in-flight Wi-Fi network to see live flight data.",
        }
    }
}

macro_rules! fetch_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::FlightSyncError::FetchFlightDataError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use fetch_error;

macro_rules! airport_data_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::FlightSyncError::AirportDataError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use airport_data_error;
