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

//! RON config and static data lookup.
//!
//! Resources are searched in this order:
//!   1. `$SKYGLOBE_HOME/<kind>/<crate>/<file>`
//!   2. `~/.skyglobe/<kind>/<crate>/<file>`
//!   3. `<crate-dir>/<kind>/<file>` (the in-repo default)
//!
//! with `<kind>` being either `configs` or `data`. Absolute paths and paths that exist relative to the
//! current working dir are used as is.
//! Crates that own configs expand [`define_load_config`] at their top level, which gives them
//! `load_config(filename)` and `data_file(filename)` functions bound to their own crate name.

use std::{env, fs, path::{Path, PathBuf}};
use serde::de::DeserializeOwned;
use tracing::debug;
use crate::errors::{Result, SkyglobeCommonError};

pub const CONFIGS: &'static str = "configs";
pub const DATA: &'static str = "data";
pub const HOME_ENV: &'static str = "SKYGLOBE_HOME";

pub fn find_resource_file (kind: &str, resource_crate: &str, crate_dir: &str, filename: &str)->Option<PathBuf> {
    let path = Path::new(filename);
    if path.is_absolute() || path.is_file() {
        return if path.is_file() { Some(path.to_path_buf()) } else { None }
    }

    if let Ok(home) = env::var(HOME_ENV) {
        let path = Path::new(&home).join(kind).join(resource_crate).join(filename);
        if path.is_file() { return Some(path) }
    }

    if let Ok(usr_home) = env::var("HOME") {
        let path = Path::new(&usr_home).join(".skyglobe").join(kind).join(resource_crate).join(filename);
        if path.is_file() { return Some(path) }
    }

    let path = Path::new(crate_dir).join(kind).join(filename);
    if path.is_file() { Some(path) } else { None }
}

pub fn load_config_path<C,P> (path: P)->Result<C> where C: DeserializeOwned, P: AsRef<Path> {
    let data = fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

pub fn load_crate_config<C> (resource_crate: &str, crate_dir: &str, filename: &str)->Result<C> where C: DeserializeOwned {
    if let Some(path) = find_resource_file( CONFIGS, resource_crate, crate_dir, filename) {
        debug!("loading config {:?}", path);
        load_config_path( &path)
    } else {
        Err( SkyglobeCommonError::ConfigNotFoundError( format!("{resource_crate}/{filename}")) )
    }
}

pub fn find_crate_data_file (resource_crate: &str, crate_dir: &str, filename: &str)->Result<PathBuf> {
    find_resource_file( DATA, resource_crate, crate_dir, filename)
        .ok_or_else( || SkyglobeCommonError::ConfigNotFoundError( format!("{resource_crate}/{DATA}/{filename}")))
}

/// this is the macro that needs to be expanded at the top (lib.rs) of crates that define configs
#[macro_export]
macro_rules! define_load_config {
    () => {
        /// load a RON config that belongs to this crate
        pub fn load_config<C> (filename: &str) -> skyglobe_common::Result<C> where C: serde::de::DeserializeOwned {
            skyglobe_common::config::load_crate_config( env!("CARGO_PKG_NAME"), env!("CARGO_MANIFEST_DIR"), filename)
        }

        /// locate a static data file that belongs to this crate
        pub fn data_file (filename: &str) -> skyglobe_common::Result<std::path::PathBuf> {
            skyglobe_common::config::find_crate_data_file( env!("CARGO_PKG_NAME"), env!("CARGO_MANIFEST_DIR"), filename)
        }
    }
}
