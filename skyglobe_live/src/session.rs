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

use std::{fmt, sync::{Mutex, MutexGuard}};
use chrono::{DateTime, Utc};
use kanal::{bounded_async, AsyncReceiver, AsyncSender};
use tracing::{debug, info, warn};
use skyglobe_common::datetime::utc_now;
use skyglobe_globe::{
    markers::{AIRPLANE_MARKER, DESTINATION_MARKER, ORIGIN_MARKER},
    AlignmentMode, CameraPlacement, Color, GlobeTransform, Marker, MarkerChange, MarkerRegistry, MarkerStyle,
    OrientationEngine, PanDelta, SunPlacement
};
use skyglobe_flight::{FlightDisplay, FlightInfo, FlightSyncConfig, FlightSyncError, FlightSyncPipeline, HttpFetcher};
use crate::{errors::{Result, SkyglobeLiveError}, GlobeConfig};

/// state changes the rendering/UI collaborators mirror
#[derive(Debug,Clone)]
pub enum SessionEvent {
    TransformChanged(GlobeTransform),
    ZoomChanged(f64),
    CameraFocused(CameraPlacement),
    Marker(MarkerChange),
    SunMoved(SunPlacement),
    DisplayUpdated(FlightDisplay),
    PollFailed(FlightSyncError),
}

impl fmt::Display for SessionEvent {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionEvent::TransformChanged(t) => write!(f, "transform: {:.4} rad", t.angle()),
            SessionEvent::ZoomChanged(fov) => write!(f, "fov: {fov:.1}°"),
            SessionEvent::CameraFocused(cam) => write!(f, "{cam}"),
            SessionEvent::Marker(change) => write!(f, "marker: {change:?}"),
            SessionEvent::SunMoved(sun) => write!(f, "sun: {}", sun.subsolar),
            SessionEvent::DisplayUpdated(display) => write!(f, "display: {display}"),
            SessionEvent::PollFailed(e) => write!(f, "poll failed: {e}"),
        }
    }
}

/// result of a flight tick
#[derive(Debug,Clone,PartialEq)]
pub enum PollOutcome {
    Updated(FlightInfo),
    Failed(FlightSyncError),
    Skipped // previous poll still in flight
}

/// everything that is mutated synchronously, guarded by a single lock
struct GlobeState {
    engine: OrientationEngine,
    markers: MarkerRegistry,
    display: FlightDisplay,
    wifi_ok: Option<bool>, // None until the host reports
}

/// one app session. Owned by the host, which calls the tick entry points from its own timers and feeds
/// gestures from its input thread.
///
/// Flight polls are not queued: a tick that finds the previous poll still running is dropped.
/// A failed poll only updates the error state, markers and displayed values stay where they were.
///
/// Events are published while the state lock is held, so the channel order is the order in which the
/// state was mutated
pub struct GlobeSession {
    globe: Mutex<GlobeState>,
    pipeline: tokio::sync::Mutex<FlightSyncPipeline>,
    domestic_countries: Vec<String>,
    allowed_ssids: Vec<String>,
    tx: AsyncSender<SessionEvent>,
    rx: Mutex<Option<AsyncReceiver<SessionEvent>>>, // until the consumer takes it
}

impl GlobeSession {
    pub fn new (config: &GlobeConfig, pipeline: FlightSyncPipeline, domestic_countries: Vec<String>)->Result<Self> {
        if config.event_capacity == 0 {
            return Err( SkyglobeLiveError::InvalidConfig( "event_capacity has to be > 0".to_string()))
        }
        let (tx,rx) = bounded_async::<SessionEvent>( config.event_capacity);

        let mut engine = OrientationEngine::new( config.alignment);
        if let Some((lat,lon)) = config.default_focus() {
            engine.focus_on_lat_lon( lat, lon);
        }

        let globe = Mutex::new( GlobeState {
            engine,
            markers: MarkerRegistry::new(),
            display: FlightDisplay::default(),
            wifi_ok: None
        });

        let session = GlobeSession {
            globe,
            pipeline: tokio::sync::Mutex::new( pipeline),
            domestic_countries,
            allowed_ssids: config.allowed_ssids.clone(),
            tx,
            rx: Mutex::new( Some(rx))
        };
        session.on_sun_tick(); // the sun marker exists from the start

        Ok(session)
    }

    pub fn from_configs (globe_config: &GlobeConfig, flight_config: &FlightSyncConfig, fetcher: std::sync::Arc<dyn HttpFetcher>)->Result<Self> {
        let pipeline = FlightSyncPipeline::from_config( flight_config, fetcher);
        info!("flight sync with {} endpoints and {} airports", pipeline.endpoints().len(), pipeline.airports().len());
        Self::new( globe_config, pipeline, flight_config.domestic_countries.clone())
    }

    /// hand out the receiving end of the event channel. There is only one, subsequent calls return None.
    /// Once the taken receiver is dropped the channel is closed and events are discarded
    pub fn take_receiver (&self)->Option<AsyncReceiver<SessionEvent>> {
        self.rx.lock().unwrap_or_else( |poisoned| poisoned.into_inner()).take()
    }

    fn globe (&self)->MutexGuard<'_,GlobeState> {
        self.globe.lock().unwrap_or_else( |poisoned| poisoned.into_inner())
    }

    fn publish (&self, event: SessionEvent) {
        match self.tx.try_send( event) {
            Ok(true) => {}
            Ok(false) => warn!("event channel full, dropping event"),
            Err(_) => debug!("event channel closed")
        }
    }

    //--- timer entry points

    pub fn on_sun_tick (&self) {
        self.on_sun_tick_at( &utc_now())
    }

    /// move the sun marker and light, and recompose the transform since the seasonal tilt depends on the date
    pub fn on_sun_tick_at (&self, date: &DateTime<Utc>) {
        let sun = SunPlacement::at( date);
        debug!("sun at {}", sun.subsolar);

        let mut globe = self.globe();
        for change in globe.markers.replace( sun.marker()) {
            self.publish( SessionEvent::Marker( change));
        }
        self.publish( SessionEvent::TransformChanged( globe.engine.compose_transform_at( date)));
        self.publish( SessionEvent::SunMoved( sun));
    }

    /// run one poll unless the previous one is still outstanding
    pub async fn on_flight_tick (&self)->PollOutcome {
        let Ok(mut pipeline) = self.pipeline.try_lock() else {
            debug!("flight poll still in progress, dropping tick");
            return PollOutcome::Skipped
        };
        let res = pipeline.fetch_flight_info().await;
        drop(pipeline);

        match res {
            Ok(info) => {
                self.apply_flight_info( &info, &utc_now());
                PollOutcome::Updated(info)
            }
            Err(e) => {
                let mut globe = self.globe();
                // if we know we are on the wrong network that is the more useful explanation
                let e = if globe.wifi_ok == Some(false) { FlightSyncError::WifiSsidError } else { e };
                warn!("flight poll failed: {e}");

                globe.display.set_error( e.user_message());
                self.publish( SessionEvent::PollFailed( e.clone()));
                self.publish( SessionEvent::DisplayUpdated( globe.display.clone()));
                PollOutcome::Failed(e)
            }
        }
    }

    /// put airport and airplane markers in place, focus on the airplane and update the display
    pub fn apply_flight_info (&self, info: &FlightInfo, now: &DateTime<Utc>) {
        let mut globe = self.globe();

        if let Some(airport) = &info.origin_airport {
            let marker = Marker::on_surface( ORIGIN_MARKER, airport.latitude, airport.longitude, MarkerStyle::Dot(Color::ORIGIN));
            let change = globe.markers.upsert( marker);
            self.publish( SessionEvent::Marker( change));
        }
        if let Some(airport) = &info.destination_airport {
            let marker = Marker::on_surface( DESTINATION_MARKER, airport.latitude, airport.longitude, MarkerStyle::Dot(Color::DESTINATION));
            let change = globe.markers.upsert( marker);
            self.publish( SessionEvent::Marker( change));
        }
        let marker = Marker::on_surface( AIRPLANE_MARKER, info.latitude, info.longitude, MarkerStyle::Dot(Color::AIRPLANE));
        let change = globe.markers.upsert( marker);
        self.publish( SessionEvent::Marker( change));

        let camera = globe.engine.focus_on_lat_lon_at( info.latitude, info.longitude, now);
        self.publish( SessionEvent::CameraFocused( camera));
        self.publish( SessionEvent::TransformChanged( globe.engine.compose_transform_at( now)));

        globe.display.update( info, now, &self.domestic_countries);
        self.publish( SessionEvent::DisplayUpdated( globe.display.clone()));
    }

    //--- Wi-Fi collaborator

    pub fn set_wifi_connected (&self, is_allowed: bool) {
        if !is_allowed { info!("not connected to an in-flight Wi-Fi network") }
        self.globe().wifi_ok = Some(is_allowed);
    }

    /// report the current SSID (None if not on Wi-Fi at all)
    pub fn set_wifi_ssid (&self, ssid: Option<&str>) {
        let is_allowed = ssid.map( |s| self.allowed_ssids.iter().any( |a| a == s)).unwrap_or(false);
        self.set_wifi_connected( is_allowed);
    }

    //--- gesture entry points

    pub fn apply_pan (&self, delta: PanDelta) {
        let mut globe = self.globe();
        if globe.engine.apply_pan( delta) {
            self.publish( SessionEvent::TransformChanged( globe.engine.compose_transform()));
        }
    }

    pub fn apply_pinch (&self, scale: f64, is_gesture_start: bool) {
        let mut globe = self.globe();
        if globe.engine.apply_pinch( scale, is_gesture_start) {
            self.publish( SessionEvent::ZoomChanged( globe.engine.fov()));
        }
    }

    pub fn set_zoom (&self, fov: f64) {
        let mut globe = self.globe();
        globe.engine.set_zoom( fov);
        self.publish( SessionEvent::ZoomChanged( globe.engine.fov()));
    }

    pub fn reset_fov (&self, is_portrait: bool) {
        let mut globe = self.globe();
        globe.engine.reset_fov( is_portrait);
        self.publish( SessionEvent::ZoomChanged( globe.engine.fov()));
    }

    pub fn set_alignment (&self, alignment: AlignmentMode) {
        let mut globe = self.globe();
        globe.engine.set_alignment( alignment);
        self.publish( SessionEvent::TransformChanged( globe.engine.compose_transform()));
    }

    //--- snapshots

    pub fn transform (&self)->GlobeTransform { self.globe().engine.compose_transform() }
    pub fn camera (&self)->CameraPlacement { *self.globe().engine.camera() }
    pub fn fov (&self)->f64 { self.globe().engine.fov() }
    pub fn display (&self)->FlightDisplay { self.globe().display.clone() }
    pub fn marker (&self, name: &str)->Option<Marker> { self.globe().markers.get( name).cloned() }
    pub fn marker_count (&self)->usize { self.globe().markers.len() }
}
