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

use std::sync::Arc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use anyhow::Result;
use skyglobe_common::{define_cli, datetime::utc_now};
use skyglobe_flight::{load_config, FlightDisplay, FlightSyncConfig, FlightSyncPipeline, ReqwestFetcher};

define_cli! { ARGS [about="poll the in-flight service and print the derived flight display"] =
    repeat: bool [help="keep polling in the configured interval", short, long],
    json: bool [help="print the flight info as JSON", long],
    config: String [help="filename of the flight sync config", long, default_value="flight_sync.ron"]
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info")))
        .init();

    let config: FlightSyncConfig = load_config( &ARGS.config)?;
    let fetcher = Arc::new( ReqwestFetcher::new( config.request_timeout)?);
    let mut pipeline = FlightSyncPipeline::from_config( &config, fetcher);
    info!("polling {} endpoints with {} airports", pipeline.endpoints().len(), pipeline.airports().len());

    let mut display = FlightDisplay::default();
    let mut ticker = interval( config.poll_interval);
    ticker.set_missed_tick_behavior( MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        match pipeline.fetch_flight_info().await {
            Ok(info) => {
                display.update( &info, &utc_now(), &config.domestic_countries);
                if ARGS.json {
                    println!("{}", serde_json::to_string_pretty( &info)?);
                }
                println!("{display}");
            }
            Err(e) => {
                error!("poll failed: {e}");
                display.set_error( e.user_message());
                println!("{display}");
            }
        }

        if !ARGS.repeat { break }
    }

    Ok(())
}
