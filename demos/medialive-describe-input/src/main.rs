/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::path::PathBuf;
use std::process;

use aws_types::region::{ChainProvider, ProvideRegion};
use bytes::Bytes;
use medialive::input::DescribeInputInput;
use medialive::{Config, Endpoint, Region};
use smithy_http::middleware::load_response;
use smithy_http::result::SdkError;
use structopt::StructOpt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Debug, StructOpt)]
struct Opt {
    /// The region. Overrides environment variables AWS_REGION and AWS_DEFAULT_REGION.
    #[structopt(short, long)]
    default_region: Option<String>,

    /// Sends requests somewhere other than the regional endpoint.
    #[structopt(short, long)]
    endpoint: Option<String>,

    /// The ID of the input to describe.
    #[structopt(short, long)]
    input_id: String,

    /// A saved response body to parse as the service's answer.
    #[structopt(short, long, parse(from_os_str))]
    response: Option<PathBuf>,

    /// HTTP status of the saved response.
    #[structopt(short, long, default_value = "200")]
    status: u16,

    #[structopt(short, long)]
    verbose: bool,
}

/// Prints the HTTP request for a MediaLive DescribeInput call and, given a saved response,
/// the parsed output or service error.
/// # Arguments
/// * `-i INPUT-ID` - The ID of the input.
/// * `[-d DEFAULT-REGION]` - The region of the endpoint.
///   If not supplied, uses the value of the **AWS_REGION** or **AWS_DEFAULT_REGION** environment
///   variable. If neither is set, defaults to **us-west-2**.
/// * `[-e ENDPOINT]` - An endpoint that replaces the regional one, e.g. `http://localhost:8000`.
/// * `[-r RESPONSE]` - A file holding a response body to parse.
/// * `[-s STATUS]` - The HTTP status of that response. Defaults to 200.
/// * `[-v]` - Whether to display additional information.
fn main() {
    let Opt {
        default_region,
        endpoint,
        input_id,
        response,
        status,
        verbose,
    } = Opt::from_args();

    let region = ChainProvider::first_try(default_region.map(Region::new))
        .or_else(aws_types::region::default_provider())
        .or_else(Region::new("us-west-2"));

    if verbose {
        println!("MediaLive client version: {}", medialive::PKG_VERSION);
        println!("Region:   {:?}", region.region());
        println!("Input ID: {}", &input_id);

        SubscriberBuilder::default()
            .with_env_filter("debug")
            .with_span_events(FmtSpan::CLOSE)
            .init();
    }

    let mut config = Config::builder().region(region);
    if let Some(endpoint) = endpoint {
        match Endpoint::from_uri_str(&endpoint) {
            Ok(endpoint) => config = config.endpoint(endpoint),
            Err(e) => {
                eprintln!("Invalid endpoint: {}", e);
                process::exit(1);
            }
        }
    }
    let config = config.build();

    let operation = match DescribeInputInput::builder()
        .input_id(input_id)
        .build()
        .and_then(|input| input.make_operation(&config))
    {
        Ok(operation) => operation,
        Err(e) => {
            eprintln!("Failed to build request: {}", e);
            process::exit(1);
        }
    };

    let (request, parts) = operation.into_request_response();
    let request = request.into_http();
    println!("{} {}", request.method(), request.uri());
    for (name, value) in request.headers() {
        println!("{}: {:?}", name, value);
    }
    if !request.body().is_empty() {
        println!("\n{}", String::from_utf8_lossy(request.body().bytes()));
    }

    let path = match response {
        Some(path) => path,
        None => return,
    };
    let body = match std::fs::read(&path) {
        Ok(body) => body,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path.display(), e);
            process::exit(1);
        }
    };
    let response = match http::Response::builder()
        .status(status)
        .body(Bytes::from(body))
    {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Invalid response: {}", e);
            process::exit(1);
        }
    };

    match load_response(response, &parts.response_handler) {
        Ok(success) => {
            let output = success.parsed;
            println!();
            println!("Name:  {}", output.name.unwrap_or_default());
            println!("ARN:   {}", output.arn.unwrap_or_default());
            println!("Type:  {:?}", output.r#type);
            println!("State: {:?}", output.state);
            for source in output.sources.unwrap_or_default() {
                println!("Source: {}", source.url.unwrap_or_default());
            }
        }
        Err(SdkError::ServiceError { raw, err }) => {
            eprintln!("Service error ({}): {}", raw.status(), err);
            if let Some(request_id) = err.request_id() {
                eprintln!("Request ID: {}", request_id);
            }
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to parse response: {:?}", e);
            process::exit(1);
        }
    }
}
