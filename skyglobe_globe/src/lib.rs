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

#![allow(unused,uncommon_codepoints,mixed_script_confusables)]

//! the globe side of skyglobe: pure geo math, the orientation engine that turns user gestures,
//! seasonal tilt and alignment mode into a single globe transform, the registry of named surface
//! markers, and the subsolar point approximation that drives the sun marker.
//!
//! Nothing in here renders or schedules. The rendering collaborator consumes [`orientation::GlobeTransform`],
//! [`orientation::CameraPlacement`] and [`markers::MarkerChange`] values, timers live in the host.

pub mod geo_math;
pub mod orientation;
pub mod markers;
pub mod sun;

pub use geo_math::LatLon;
pub use orientation::{AlignmentMode, CameraPlacement, GlobeTransform, OrientationEngine, OrientationState, PanDelta};
pub use markers::{Color, Marker, MarkerChange, MarkerRegistry, MarkerStyle};
pub use sun::{subsolar_point, SunPlacement};
