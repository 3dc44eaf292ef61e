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

use std::{collections::VecDeque, sync::{Arc, Mutex}, time::Duration};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use kanal::AsyncReceiver;
use tokio::sync::{Notify, Semaphore};
use skyglobe_globe::{
    geo_math::{lat_lon_to_unit, CAMERA_ALTITUDE, GLOBE_RADIUS},
    markers::{AIRPLANE_MARKER, DESTINATION_MARKER, ORIGIN_MARKER, SUN_MARKER},
    AlignmentMode, MarkerChange, PanDelta
};
use skyglobe_flight::{
    AirportIndex, AirportKey, Endpoint, FlightSyncError, FlightSyncPipeline, HttpFetcher, HttpResponse, SchemaKind, Result
};
use skyglobe_live::{GlobeConfig, GlobeSession, PollOutcome, SessionEvent};

// run with "cargo test -p skyglobe_live -- --nocapture"

const FLAT: &'static str = r#"{"timestamp":"2024-06-08T18:23:45Z","flightNumber":"AA44","latitude":52.1234,"longitude":-35.5678,"vehicleId":"N720AN","destination":"LFPG","origin":"KORD","altitude":35000.9,"groundspeed":512.3,"heading":74,"timeToGo":185}"#;

const AIRPORTS: &'static str = r#"[
  {"City":"Chicago","Country":"United States","IATA":"ORD","ICAO":"KORD","Latitude":41.9786,"Longitude":-87.9048,"Altitude":672,"TZ":"America/Chicago"},
  {"City":"Paris","Country":"France","IATA":"CDG","ICAO":"LFPG","Latitude":49.012798,"Longitude":2.55,"Altitude":392,"TZ":"Europe/Paris"}
]"#;

const URL: &'static str = "http://inflight.example/flight";

/// answers with scripted statuses, transport failure once the script is exhausted
struct ScriptedFetcher {
    script: Mutex<VecDeque<u16>>
}

impl ScriptedFetcher {
    fn new (script: Vec<u16>)->Arc<Self> { Arc::new( ScriptedFetcher { script: Mutex::new( script.into_iter().collect()) }) }
}

#[async_trait]
impl HttpFetcher for ScriptedFetcher {
    async fn get (&self, url: &str)->Result<HttpResponse> {
        match self.script.lock().unwrap().pop_front() {
            Some(status) => Ok( HttpResponse::new( status, FLAT.as_bytes())),
            None => Err( FlightSyncError::FetchFlightDataError( "connection refused".to_string()))
        }
    }
}

/// holds every request until the test releases it
struct GatedFetcher {
    started: Notify,
    gate: Semaphore
}

#[async_trait]
impl HttpFetcher for GatedFetcher {
    async fn get (&self, url: &str)->Result<HttpResponse> {
        self.started.notify_one();
        let _permit = self.gate.acquire().await.map_err( |e| FlightSyncError::FetchFlightDataError( e.to_string()))?;
        Ok( HttpResponse::new( 200, FLAT.as_bytes()))
    }
}

fn config (event_capacity: usize)->GlobeConfig {
    GlobeConfig {
        alignment: AlignmentMode::Poles,
        sun_interval: Duration::from_secs(60),
        default_lat: None,
        default_lon: None,
        event_capacity,
        allowed_ssids: vec![ "AA-Inflight".to_string() ]
    }
}

fn session (fetcher: Arc<dyn HttpFetcher>)->GlobeSession {
    session_with_capacity( fetcher, 64)
}

fn session_with_capacity (fetcher: Arc<dyn HttpFetcher>, event_capacity: usize)->GlobeSession {
    let airports = Arc::new( AirportIndex::from_json( AirportKey::Icao, AIRPORTS.as_bytes()).unwrap());
    let pipeline = FlightSyncPipeline::new( vec![ Endpoint::new( URL, SchemaKind::Flat) ], fetcher, airports);
    GlobeSession::new( &config( event_capacity), pipeline, vec![ "US".to_string(), "United States".to_string() ]).unwrap()
}

fn drain (rx: &AsyncReceiver<SessionEvent>)->Vec<SessionEvent> {
    let mut events = Vec::new();
    while let Ok(Some(event)) = rx.try_recv() {
        println!("  {event}");
        events.push( event);
    }
    events
}

#[tokio::test]
async fn test_initial_sun() {
    let session = session( ScriptedFetcher::new( vec![]));
    let rx = session.take_receiver().unwrap();

    assert_eq!( session.marker_count(), 1);
    assert!( session.marker( SUN_MARKER).is_some());

    let events = drain( &rx);
    assert!( events.iter().any( |e| matches!( e, SessionEvent::SunMoved(_))));

    session.on_sun_tick_at( &Utc.with_ymd_and_hms( 2024, 6, 20, 20, 51, 0).unwrap());
    let events = drain( &rx);
    assert!( events.iter().any( |e| matches!( e, SessionEvent::Marker( MarkerChange::Removed(_)))));
    assert!( events.iter().any( |e| matches!( e, SessionEvent::TransformChanged(_))));
    assert_eq!( session.marker_count(), 1);
    assert!( (session.marker( SUN_MARKER).unwrap().latitude - 23.44).abs() < 0.2);
}

#[tokio::test]
async fn test_successful_poll() {
    let session = session( ScriptedFetcher::new( vec![200]));
    let rx = session.take_receiver().unwrap();
    drain( &rx);

    let outcome = session.on_flight_tick().await;
    assert!( matches!( outcome, PollOutcome::Updated(_)));

    assert_eq!( session.marker_count(), 4);
    let airplane = session.marker( AIRPLANE_MARKER).unwrap();
    assert_eq!( (airplane.latitude, airplane.longitude), (52.1234, -35.5678));
    assert_eq!( session.marker( ORIGIN_MARKER).unwrap().latitude, 41.9786);
    assert_eq!( session.marker( DESTINATION_MARKER).unwrap().longitude, 2.55);

    // the camera looks straight at the airplane as it appears in the transformed scene
    let cam = session.camera();
    let target = session.transform() * lat_lon_to_unit( 52.1234, -35.5678).to_vector3();
    println!("target {target:?}, camera {}", cam.position);
    assert!( (cam.position.length() - (GLOBE_RADIUS + CAMERA_ALTITUDE)).abs() < 1e-9);
    assert!( target.normalize().dot( &cam.position.to_vector3().normalize()) > 0.9999);

    let display = session.display();
    assert_eq!( display.flight_number, "AA44");
    assert_eq!( display.destination_city, "Paris\nFrance");

    let events = drain( &rx);
    assert!( events.iter().any( |e| matches!( e, SessionEvent::CameraFocused(_))));
    assert!( events.iter().any( |e| matches!( e, SessionEvent::DisplayUpdated(_))));
    assert_eq!( events.iter().filter( |e| matches!( e, SessionEvent::Marker( MarkerChange::Added(_)))).count(), 3);
}

#[tokio::test]
async fn test_failure_keeps_stale_data() {
    let session = session( ScriptedFetcher::new( vec![200, 500]));
    let rx = session.take_receiver().unwrap();

    assert!( matches!( session.on_flight_tick().await, PollOutcome::Updated(_)));
    let airplane = session.marker( AIRPLANE_MARKER).unwrap();
    let display = session.display();
    drain( &rx);

    let outcome = session.on_flight_tick().await;
    println!("{outcome:?}");
    assert!( matches!( outcome, PollOutcome::Failed( FlightSyncError::FetchFlightDataError(_))));

    assert_eq!( session.marker( AIRPLANE_MARKER).unwrap(), airplane);
    assert_eq!( session.marker_count(), 4);
    let d = session.display();
    assert_eq!( d.flight_number, display.flight_number);
    assert_eq!( d.altitude, display.altitude);
    assert!( d.last_error.is_some());

    let events = drain( &rx);
    assert!( events.iter().any( |e| matches!( e, SessionEvent::PollFailed(_))));
    assert!( !events.iter().any( |e| matches!( e, SessionEvent::Marker(_))));
}

#[tokio::test]
async fn test_overlapping_tick_skipped() {
    let fetcher = Arc::new( GatedFetcher { started: Notify::new(), gate: Semaphore::new(0) });
    let session = Arc::new( session( fetcher.clone()));

    let s = session.clone();
    let first = tokio::spawn( async move { s.on_flight_tick().await });
    fetcher.started.notified().await; // first poll is now waiting for the response

    assert_eq!( session.on_flight_tick().await, PollOutcome::Skipped);

    fetcher.gate.add_permits(1);
    let outcome = first.await.unwrap();
    assert!( matches!( outcome, PollOutcome::Updated(_)));
}

#[tokio::test]
async fn test_wifi_error() {
    let session = session( ScriptedFetcher::new( vec![]));

    session.set_wifi_ssid( Some("Starbucks"));
    assert_eq!( session.on_flight_tick().await, PollOutcome::Failed( FlightSyncError::WifiSsidError));

    session.set_wifi_ssid( Some("AA-Inflight"));
    assert_eq!( session.on_flight_tick().await, PollOutcome::Failed( FlightSyncError::ServiceDown));
}

#[tokio::test]
async fn test_gesture_events() {
    let session = session( ScriptedFetcher::new( vec![]));
    let rx = session.take_receiver().unwrap();
    drain( &rx);

    session.apply_pan( PanDelta::new( 0.0, 0.0));
    assert!( drain( &rx).is_empty());

    session.apply_pan( PanDelta::new( 0.1, 0.0));
    assert!( matches!( drain( &rx).as_slice(), [SessionEvent::TransformChanged(_)]));

    session.apply_pinch( 2.0, false); // no gesture start
    assert!( drain( &rx).is_empty());
    session.apply_pinch( 1.0, true);
    session.apply_pinch( 2.0, false);
    assert!( matches!( drain( &rx).as_slice(), [SessionEvent::ZoomChanged(fov)] if *fov == 20.0));

    session.set_zoom( 100.0);
    assert_eq!( session.fov(), 60.0);
    session.reset_fov( true);
    assert_eq!( session.fov(), 40.0);
}

#[test]
fn test_globe_config() {
    let config: GlobeConfig = skyglobe_live::load_config( "globe.ron").unwrap();
    println!("{config:?}");
    assert_eq!( config.sun_interval, Duration::from_secs(60));
    assert!( config.default_focus().is_some());
    assert!( config.event_capacity > 0);
}

#[tokio::test]
async fn test_single_receiver() {
    let session = session( ScriptedFetcher::new( vec![]));

    let rx = session.take_receiver();
    assert!( rx.is_some());
    assert!( session.take_receiver().is_none());

    drop(rx); // closes the channel, publishing keeps working without a consumer
    for _ in 0..100 { session.apply_pan( PanDelta::new( 0.01, 0.0)); }
    session.on_sun_tick();
    assert_eq!( session.marker_count(), 1);
}

#[tokio::test]
async fn test_concurrent_pan_and_flight_update() {
    let session = Arc::new( session_with_capacity( ScriptedFetcher::new( vec![200]), 4096));
    let rx = session.take_receiver().unwrap();

    let PollOutcome::Updated(info) = session.on_flight_tick().await else { panic!("poll failed") };
    while let Ok(Some(_)) = rx.try_recv() {}

    std::thread::scope( |scope| {
        scope.spawn( || {
            for _ in 0..200 { session.apply_pan( PanDelta::new( 0.003, -0.002)); }
        });
        scope.spawn( || {
            for _ in 0..200 { session.apply_flight_info( &info, &Utc::now()); }
        });
    });

    let mut last_transform = None;
    let mut n = 0;
    while let Ok(Some(event)) = rx.try_recv() {
        n += 1;
        if let SessionEvent::TransformChanged(t) = event { last_transform = Some(t) }
    }
    println!("received {n} events");
    assert_eq!( n, 200 + 200 * 6);

    // the last published transform is the one the state ended up with
    let last_transform = last_transform.unwrap();
    assert!( (last_transform.matrix() - session.transform().matrix()).norm() < 1e-12);
}
