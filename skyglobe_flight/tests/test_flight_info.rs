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

use std::env;
use chrono::{TimeZone, Utc};
use skyglobe_flight::{airport::*, flight_info::*, FlightSyncError};

// run with "cargo test -p skyglobe_flight --test test_flight_info -- --nocapture"

const FLAT: &'static str = r#"{"timestamp":"2024-06-08T18:23:45Z","eta":null,"flightDuration":615,"flightNumber":"AA44","latitude":52.1234,"longitude":-35.5678,"noseId":"N123","paState":null,"vehicleId":"N720AN","destination":"LFPG","origin":"KORD","flightId":"AA44-20240608","airspeed":480.0,"airTemperature":-52.0,"altitude":35000.9,"distanceToGo":1450.0,"doorState":"closed","groundspeed":512.3,"heading":74,"timeToGo":185,"wheelWeightState":"air"}"#;

const NESTED: &'static str = r#"{"Response":{"status":200,"flightInfo":{"logo":null,"airlineName":"American Airlines","airlineCode":"AAL","airlineCodeIata":"AA","tailNumber":"N720AN","flightNumberInfo":"AA44","flightNumberAlpha":"AA","flightNumberNumeric":"44","departureAirportCode":"KORD","destinationAirportCode":"LFPG","departureAirportCodeIata":"ORD","destinationAirportCodeIata":"CDG","departureAirportLatitude":41.9786,"destinationAirportLatitude":49.0128,"departureAirportLongitude":-87.9048,"destinationAirportLongitude":2.55,"expectedArrival":"2024-06-08T21:28:00","abpVersion":"1.2","acpuVersion":"3.4","videoService":true,"latitude":52.1234,"longitude":-35.5678,"altitude":35000.9,"localTime":null,"utcTime":"2024-06-08T18:23:45","destinationTimeZoneOffset":120,"hspeed":512.3,"vspeed":0.0},"gogoFacts":"","serviceInfo":{"service":"Inflight","remaining":0,"quality":null,"productCode":null,"alerts":[]},"ipAddress":"172.19.1.1","macAddress":"00:00:00:00:00:00","systemInfo":{"wapType":"x","systemType":"y","arincEnabled":"true","horizontalVelocity":"512","verticalVelocity":"0","aboveGndLevel":"35000","aboveSeaLevel":"35000","flightPhase":"cruise","flightNo":"AA44","timeToLand":185,"paxSsidStatus":"up","casSsidStatus":"up","countryCode":"","airportCode":"","linkState":"up","linkType":"ku","tunnelState":"up","tunnelType":"x","ifcPaxServiceState":"x","ifcCasServiceState":"x","currentLinkStatusCode":"0","currentLinkStatusDescription":"ok","noSubscribedUsers":"12","aircraftType":"B772"},"device_iid":"abc"}}"#;

const NESTED_MINIMAL: &'static str = r#"{"Response":{"flightInfo":{"tailNumber":"N720AN","flightNumberInfo":"AA44","departureAirportCode":"KORD","destinationAirportCode":"LFPG","latitude":52.1234,"longitude":-35.5678,"utcTime":"2024-06-08T18:23:45Z"}}}"#;

const AIRPORTS: &'static str = r#"[
  {"City":"Chicago","Country":"United States","IATA":"ORD","ICAO":"KORD","Latitude":41.9786,"Longitude":-87.9048,"Altitude":672,"TZ":"America/Chicago"},
  {"City":"Chicago Duplicate","Country":"United States","IATA":"XXX","ICAO":"KORD","Latitude":0.0,"Longitude":0.0,"Altitude":0,"TZ":"America/Chicago"},
  {"City":"Paris","Country":"France","IATA":"CDG","ICAO":"LFPG","Latitude":49.012798,"Longitude":2.55,"Altitude":392,"TZ":"Europe/Paris"},
  {"City":"Nowhere","Country":"Nowhere","IATA":"\\N","ICAO":"","Latitude":0.0,"Longitude":0.0,"Altitude":0,"TZ":"UTC"}
]"#;

#[test]
fn test_flat_decode() {
    let info = FlightPayload::decode( SchemaKind::Flat, FLAT.as_bytes()).unwrap().into_flight_info( AirportKey::Icao).unwrap();
    println!("{info:#?}");

    assert_eq!( info.timestamp, Utc.with_ymd_and_hms( 2024, 6, 8, 18, 23, 45).unwrap());
    assert_eq!( info.vehicle_id, "N720AN");
    assert_eq!( info.heading.degrees(), 74.0);
    assert_eq!( info.time_to_go, 185);
    assert_eq!( info.airspeed, Some(480.0));
    assert_eq!( info.distance_to_go, Some(1450.0));
    assert_eq!( info.eta, None);
    assert!( info.origin_airport.is_none()); // not enriched yet
}

#[test]
fn test_nested_matches_flat() {
    let flat = FlightPayload::decode( SchemaKind::Flat, FLAT.as_bytes()).unwrap().into_flight_info( AirportKey::Icao).unwrap();
    let nested = FlightPayload::decode( SchemaKind::Nested, NESTED.as_bytes()).unwrap().into_flight_info( AirportKey::Icao).unwrap();
    println!("{nested:#?}");

    assert_eq!( nested.timestamp, flat.timestamp);
    assert_eq!( nested.flight_number, flat.flight_number);
    assert_eq!( nested.vehicle_id, flat.vehicle_id); // tailNumber
    assert_eq!( nested.origin, flat.origin);
    assert_eq!( nested.destination, flat.destination);
    assert_eq!( nested.latitude, flat.latitude);
    assert_eq!( nested.longitude, flat.longitude);
    assert_eq!( nested.groundspeed, flat.groundspeed); // hspeed
    assert_eq!( nested.altitude, flat.altitude);
    assert_eq!( nested.time_to_go, flat.time_to_go); // systemInfo.timeToLand

    assert_eq!( nested.heading.degrees(), 0.0);
    assert_eq!( nested.airspeed, None);
}

#[test]
fn test_nested_defaults() {
    let info = FlightPayload::decode( SchemaKind::Nested, NESTED_MINIMAL.as_bytes()).unwrap().into_flight_info( AirportKey::Icao).unwrap();
    assert_eq!( info.timestamp, Utc.with_ymd_and_hms( 2024, 6, 8, 18, 23, 45).unwrap());
    assert_eq!( info.time_to_go, 0);
    assert_eq!( info.groundspeed, 0.0);
    assert_eq!( info.altitude, 0.0);
}

#[test]
fn test_nested_ignores_unused_fields() {
    // fields we do not map are not interpreted, so odd values there cannot fail the decode
    let json = r#"{"Response":{"status":"ok","flightInfo":{"tailNumber":"N720AN","flightNumberInfo":"AA44","airlineCode":7,"departureAirportCode":"KORD","destinationAirportCode":"LFPG","latitude":52.1234,"longitude":-35.5678,"vspeed":"n/a","expectedArrival":1717881000,"utcTime":"2024-06-08T18:23:45"},"systemInfo":{"timeToLand":185,"flightPhase":null}}}"#;
    let info = FlightPayload::decode( SchemaKind::Nested, json.as_bytes()).unwrap().into_flight_info( AirportKey::Icao).unwrap();
    assert_eq!( info.flight_number, "AA44");
    assert_eq!( info.time_to_go, 185);
    assert_eq!( info.eta, None);
}

#[test]
fn test_nested_iata_codes() {
    let info = FlightPayload::decode( SchemaKind::Nested, NESTED.as_bytes()).unwrap().into_flight_info( AirportKey::Iata).unwrap();
    assert_eq!( (info.origin.as_str(), info.destination.as_str()), ("ORD", "CDG"));

    // no IATA codes in payload -> fall back to the primary codes
    let info = FlightPayload::decode( SchemaKind::Nested, NESTED_MINIMAL.as_bytes()).unwrap().into_flight_info( AirportKey::Iata).unwrap();
    assert_eq!( info.origin, "KORD");
}

#[test]
fn test_decode_errors() {
    // flat payload through the nested decoder and vice versa
    let res = FlightPayload::decode( SchemaKind::Nested, FLAT.as_bytes());
    assert!( matches!( res, Err(FlightSyncError::FetchFlightDataError(_))));
    let res = FlightPayload::decode( SchemaKind::Flat, NESTED.as_bytes());
    assert!( matches!( res, Err(FlightSyncError::FetchFlightDataError(_))));

    let bad_time = NESTED_MINIMAL.replace( "2024-06-08T18:23:45Z", "June 8th");
    let res = FlightPayload::decode( SchemaKind::Nested, bad_time.as_bytes()).unwrap().into_flight_info( AirportKey::Icao);
    println!("{res:?}");
    assert!( matches!( res, Err(FlightSyncError::FetchFlightDataError(_))));
}

#[test]
fn test_airport_index() {
    let index = AirportIndex::from_json( AirportKey::Icao, AIRPORTS.as_bytes()).unwrap();
    assert_eq!( index.len(), 2);
    assert_eq!( index.get("KORD").unwrap().city, "Chicago"); // first one wins
    assert!( index.get("").is_none());
    assert!( index.get("ZZZZ").is_none());

    let index = AirportIndex::from_json( AirportKey::Iata, AIRPORTS.as_bytes()).unwrap();
    assert_eq!( index.len(), 3);
    assert_eq!( index.get("CDG").unwrap().icao, "LFPG");

    let res = AirportIndex::from_json( AirportKey::Icao, b"{ not an array }");
    assert!( matches!( res, Err(FlightSyncError::AirportDataError(_))));
}

#[test]
fn test_bundled_airports() {
    let path = format!("{}/data/airports.json", env!("CARGO_MANIFEST_DIR"));
    let index = AirportIndex::load( AirportKey::Icao, &path).unwrap();
    assert!( index.len() > 10);
    assert_eq!( index.get("LFPG").unwrap().tz, "Europe/Paris");

    let index = AirportIndex::load_or_empty( AirportKey::Icao, "/does/not/exist.json");
    assert!( index.is_empty());
}
