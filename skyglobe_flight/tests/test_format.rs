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

use chrono::{TimeZone, Utc};
use skyglobe_flight::format::*;

// run with "cargo test -p skyglobe_flight --test test_format -- --nocapture"

#[test]
fn test_time_to_go() {
    assert_eq!( format_time_to_go( 0), "");
    assert_eq!( format_time_to_go( -10), "");
    assert_eq!( format_time_to_go( 45), "45m");
    assert_eq!( format_time_to_go( 65), "1h 5m");
    assert_eq!( format_time_to_go( 120), "2h");
    assert_eq!( format_time_to_go( 605), "10h 5m");
}

#[test]
fn test_altitude() {
    assert_eq!( format_altitude( 35000.9), "35,000 ft");
    assert_eq!( format_altitude( 999.0), "999 ft");
    assert_eq!( format_altitude( 1234567.0), "1,234,567 ft");
    assert_eq!( format_altitude( 0.4), "0 ft");
}

#[test]
fn test_knots_to_mph() {
    assert_eq!( knots_to_mph( 100.0), 115);
    assert_eq!( knots_to_mph( 0.0), 0);
    assert_eq!( knots_to_mph( 512.3), 589); // 589.544...
    assert_eq!( format_ground_speed( 100.0), "115 mph");
}

#[test]
fn test_local_time_at() {
    let t = Utc.with_ymd_and_hms( 2024, 6, 8, 18, 5, 0).unwrap();
    assert_eq!( local_time_at( "America/Chicago", &t), Some("1:05 PM".to_string()));
    assert_eq!( local_time_at( "Europe/Paris", &t), Some("8:05 PM".to_string()));
    assert_eq!( local_time_at( "Asia/Tokyo", &t), Some("3:05 AM".to_string()));
    assert_eq!( local_time_at( "Mars/Olympus_Mons", &t), None);
}

#[test]
fn test_city_label() {
    let domestic = vec![ "US".to_string(), "United States".to_string() ];
    assert_eq!( city_label( "Paris", "France", &domestic), "Paris\nFrance");
    assert_eq!( city_label( "Chicago", "United States", &domestic), "Chicago");
    assert_eq!( city_label( "Chicago", "US", &domestic), "Chicago");
}
