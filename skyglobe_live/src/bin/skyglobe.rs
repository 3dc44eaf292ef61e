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
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use anyhow::Result;
use skyglobe_common::define_cli;
use skyglobe_flight::{FlightSyncConfig, ReqwestFetcher};
use skyglobe_live::{load_config, GlobeConfig, GlobeSession, PollOutcome};

define_cli! { ARGS [about="run a skyglobe session with sun and flight tick timers and print all session events"] =
    globe_config: String [help="filename of the globe session config", long, default_value="globe.ron"],
    flight_config: String [help="filename of the flight sync config", long, default_value="flight_sync.ron"],
    ssid: Option<String> [help="SSID of the Wi-Fi network we are on", long]
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info")))
        .init();

    let globe_config: GlobeConfig = load_config( &ARGS.globe_config)?;
    let flight_config: FlightSyncConfig = skyglobe_flight::load_config( &ARGS.flight_config)?;
    let fetcher = Arc::new( ReqwestFetcher::new( flight_config.request_timeout)?);

    let session = Arc::new( GlobeSession::from_configs( &globe_config, &flight_config, fetcher)?);
    if let Some(ssid) = &ARGS.ssid {
        session.set_wifi_ssid( Some(ssid.as_str()));
    }

    //--- the rendering collaborator stand-in
    let rx = session.take_receiver().ok_or_else( || anyhow::anyhow!("event receiver already taken"))?;
    tokio::spawn( async move {
        while let Ok(event) = rx.recv().await {
            println!("{event}");
        }
    });

    //--- sun timer
    let s = session.clone();
    let sun_interval = globe_config.sun_interval;
    tokio::spawn( async move {
        let mut ticker = interval( sun_interval);
        ticker.set_missed_tick_behavior( MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            s.on_sun_tick();
        }
    });

    //--- flight poll timer. Each poll runs in its own task so that a slow poll gets overlapping ticks dropped
    let s = session.clone();
    let poll_interval = flight_config.poll_interval;
    tokio::spawn( async move {
        let mut ticker = interval( poll_interval);
        ticker.set_missed_tick_behavior( MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let s = s.clone();
            tokio::spawn( async move {
                if let PollOutcome::Skipped = s.on_flight_tick().await {
                    warn!("flight tick skipped");
                }
            });
        }
    });

    tokio::signal::ctrl_c().await?;
    info!("terminating skyglobe session");
    Ok(())
}
