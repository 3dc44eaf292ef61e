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

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use crate::errors::{fetch_error, Result};

/// what we need from a HTTP GET
#[derive(Debug,Clone,PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>
}

impl HttpResponse {
    pub fn new (status: u16, body: impl Into<Vec<u8>>)->Self {
        HttpResponse { status, body: body.into() }
    }

    pub fn is_ok (&self)->bool { self.status == 200 }
}

/// the injected network capability of the flight sync pipeline. Transport failures (including timeouts)
/// are reported as errors, non-200 responses are not
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn get (&self, url: &str)->Result<HttpResponse>;
}

/// production fetcher with a per request timeout
pub struct ReqwestFetcher {
    client: Client
}

impl ReqwestFetcher {
    pub fn new (timeout: Duration)->Result<Self> {
        let client = Client::builder()
            .timeout( timeout)
            .build()
            .map_err( |e| fetch_error!("cannot create http client: {e}"))?;
        Ok( ReqwestFetcher { client } )
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get (&self, url: &str)->Result<HttpResponse> {
        let response = self.client.get( url).send().await
            .map_err( |e| fetch_error!("request to {url} failed: {e}"))?;
        let status = response.status().as_u16();
        let body = response.bytes().await
            .map_err( |e| fetch_error!("reading response from {url} failed: {e}"))?;
        debug!("GET {url} -> {status} ({} bytes)", body.len());

        Ok( HttpResponse { status, body: body.to_vec() } )
    }
}
