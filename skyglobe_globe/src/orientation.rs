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
use chrono::{DateTime, TimeZone, Utc};
use nalgebra::{Rotation3, Vector3};
use serde::{Serialize, Deserialize};
use tracing::debug;
use skyglobe_common::{cartesian3::Cartesian3, datetime::utc_now, rad};
use crate::geo_math::{
    clamp_fov, compute_seasonal_tilt, fov_proportion, lat_lon_to_unit,
    CAMERA_ALTITUDE, DEFAULT_FOV, DRAG_WIDTH_DEGREES, GLOBE_RADIUS
};

/// the single combined rotation the rendering collaborator applies to the globe subtree
pub type GlobeTransform = Rotation3<f64>;

/// which visual axis of the globe stays fixed
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
pub enum AlignmentMode {
    /// vertical spin axis stays aligned with the true poles regardless of season
    #[default]
    Poles,
    /// the day/night terminator stays aligned, seasonal wobble is applied before the user rotation
    DayNightTerminator,
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct OrientationState {
    pub user_tilt_radians: f64,
    pub user_rotation_radians: f64,
    pub fov_degrees: f64, // always within [MIN_FOV,MAX_FOV]
    pub alignment: AlignmentMode,
}

/// pan distance divided by the respective viewport dimension
#[derive(Debug,Clone,Copy,PartialEq,Default)]
pub struct PanDelta {
    pub width: f64,
    pub height: f64
}

impl PanDelta {
    pub fn new (width: f64, height: f64)->Self { PanDelta{width,height} }

    /// delta between two view locations (in view coordinates) of a view with given size
    pub fn from_locations (last: (f64,f64), current: (f64,f64), view_size: (f64,f64))->Self {
        PanDelta {
            width: (last.0 - current.0) / view_size.0,
            height: (last.1 - current.1) / view_size.1
        }
    }

    pub fn is_zero (&self)->bool { self.width == 0.0 && self.height == 0.0 }
}

/// camera position with look-at constraint
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct CameraPlacement {
    pub position: Cartesian3,
    pub look_at: Cartesian3,
}

impl Default for CameraPlacement {
    fn default()->Self {
        CameraPlacement {
            position: Cartesian3::new( 0.0, 0.0, GLOBE_RADIUS + CAMERA_ALTITUDE),
            look_at: Cartesian3::zero()
        }
    }
}

impl fmt::Display for CameraPlacement {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Camera( pos: {}, look_at: {} )", self.position, self.look_at)
    }
}

/// owner of the globe orientation state. All operations are synchronous state transitions without
/// error channel - out of range input is clamped.
/// The engine does not lock. Callers that feed it from several threads have to wrap it into a single mutex
#[derive(Debug)]
pub struct OrientationEngine {
    state: OrientationState,
    fov_before_pinch: Option<f64>, // snapshot taken at pinch gesture start
    camera: CameraPlacement,
}

impl OrientationEngine {
    pub fn new (alignment: AlignmentMode)->Self {
        let state = OrientationState {
            user_tilt_radians: 0.0,
            user_rotation_radians: 0.0,
            fov_degrees: DEFAULT_FOV,
            alignment
        };
        OrientationEngine { state, fov_before_pinch: None, camera: CameraPlacement::default() }
    }

    pub fn state (&self)->&OrientationState { &self.state }
    pub fn fov (&self)->f64 { self.state.fov_degrees }
    pub fn alignment (&self)->AlignmentMode { self.state.alignment }
    pub fn camera (&self)->&CameraPlacement { &self.camera }

    pub fn set_alignment (&mut self, alignment: AlignmentMode) {
        self.state.alignment = alignment;
    }

    /// rotate (width) and tilt (height) by a drag that is scaled with the current zoom level, i.e. the
    /// closer we are zoomed in the finer the rotation for the same finger travel.
    /// Returns false if the delta was zero and nothing changed
    pub fn apply_pan (&mut self, delta: PanDelta)->bool {
        if delta.is_zero() { return false }

        let drag_radians = fov_proportion( self.state.fov_degrees) * rad(DRAG_WIDTH_DEGREES);
        self.state.user_rotation_radians -= delta.width * drag_radians;
        self.state.user_tilt_radians -= delta.height * drag_radians;
        true
    }

    /// pinch zoom. The gesture start takes a fov snapshot, updates scale that snapshot.
    /// Returns true if the fov was updated. Updates without a preceding start are ignored
    pub fn apply_pinch (&mut self, scale: f64, is_gesture_start: bool)->bool {
        if is_gesture_start {
            self.fov_before_pinch = Some(self.state.fov_degrees);
            false
        } else if let Some(last_fov) = self.fov_before_pinch {
            self.state.fov_degrees = clamp_fov( last_fov / scale);
            true
        } else {
            false
        }
    }

    /// direct (non-gesture) zoom setter
    pub fn set_zoom (&mut self, fov: f64) {
        self.state.fov_degrees = clamp_fov(fov);
    }

    /// back to the default zoom level for the given device orientation (landscape is zoomed in)
    pub fn reset_fov (&mut self, is_portrait: bool) {
        let fov = if is_portrait { DEFAULT_FOV } else { DEFAULT_FOV - 20.0 };
        self.set_zoom(fov);
    }

    /// jump (no interpolation) so that the given location faces the viewer, and move the camera onto
    /// the surface normal of that location, still looking at the globe center
    pub fn focus_on_lat_lon (&mut self, lat: f64, lon: f64)->CameraPlacement {
        self.focus_on_lat_lon_at( lat, lon, &utc_now())
    }

    /// focus for the given date. The camera follows the rotated surface normal, i.e. it sits on the
    /// normal as it appears in the scene after the globe transform of that date is applied
    pub fn focus_on_lat_lon_at<Tz: TimeZone> (&mut self, lat: f64, lon: f64, date: &DateTime<Tz>)->CameraPlacement {
        self.state.user_tilt_radians = rad(lat);
        self.state.user_rotation_radians = -rad(lon);

        let normal = self.compose_transform_at( date) * lat_lon_to_unit( lat, lon).to_vector3();
        self.camera = CameraPlacement {
            position: Cartesian3::from( normal) * (GLOBE_RADIUS + CAMERA_ALTITUDE),
            look_at: Cartesian3::zero()
        };
        debug!("focus on ({lat:.4},{lon:.4}) -> {}", self.camera);

        self.camera
    }

    /// compose the globe transform for the current time
    pub fn compose_transform (&self)->GlobeTransform {
        self.compose_transform_at( &utc_now())
    }

    /// compose user tilt, user rotation and seasonal tilt for the given date. The order depends on the
    /// alignment mode (rotations do not commute). Each step is post-multiplied onto the accumulated
    /// matrix, tilts are about the lateral (X) axis, the user rotation about the vertical (Y) axis
    pub fn compose_transform_at<Tz: TimeZone> (&self, date: &DateTime<Tz>)->GlobeTransform {
        let seasonal_tilt = -compute_seasonal_tilt( date);

        let user_tilt = Rotation3::from_axis_angle( &Vector3::x_axis(), self.state.user_tilt_radians);
        let user_rotation = Rotation3::from_axis_angle( &Vector3::y_axis(), self.state.user_rotation_radians);
        let season = Rotation3::from_axis_angle( &Vector3::x_axis(), seasonal_tilt);

        match self.state.alignment {
            AlignmentMode::Poles => user_tilt * user_rotation * season,
            AlignmentMode::DayNightTerminator => user_tilt * season * user_rotation,
        }
    }
}

impl Default for OrientationEngine {
    fn default()->Self { OrientationEngine::new( AlignmentMode::default()) }
}
