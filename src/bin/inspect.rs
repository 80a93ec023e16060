#![cfg(feature = "cli")]

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::arg;
use dns_annotations::{
    AnnotationError, AnnotationKeys, ErrorKind,
    rr::{Access, ProviderSpecific, SrvValues, SuitableType, TimeToLive},
    source::group_targets_by_type,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match inspect() {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum Outcome<T> {
    Ok(T),
    Error { kind: ErrorKind, message: String },
}

impl<T> From<Result<T, AnnotationError>> for Outcome<T> {
    fn from(value: Result<T, AnnotationError>) -> Self {
        match value {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Error {
                kind: error.kind(),
                message: error.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    managed: bool,
    hostnames: Vec<String>,
    internal_hostnames: Vec<String>,
    targets: BTreeMap<SuitableType, Vec<String>>,
    ttl: Outcome<TimeToLive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    srv: Option<Outcome<SrvValues>>,
    alias: bool,
    access: Option<Access>,
    set_identifier: Option<&'a str>,
    provider_specific: ProviderSpecific,
}

fn parse_annotation(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("annotation {value:?} is not in KEY=VALUE form"))
}

fn load_keys(path: &Path) -> Result<AnnotationKeys, Box<dyn std::error::Error>> {
    let document = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&document)?)
}

fn inspect() -> Result<(), ()> {
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = clap::Command::new("dns-annotations")
        .about("Show the DNS settings carried by a set of resource annotations")
        .arg(
            arg!(--keys <PATH> "JSON file overriding the annotation keys")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(arg!(--service <NAME> "Service name, enables SRV extraction").required(false))
        .arg(
            arg!([ANNOTATION] ... "Annotations, as KEY=VALUE")
                .value_parser(parse_annotation),
        );

    let args = app.get_matches();

    let keys = match args.get_one::<PathBuf>("keys") {
        Some(path) => match load_keys(path) {
            Ok(keys) => keys,
            Err(error) => {
                eprintln!("Error loading annotation keys from {}:", path.display());
                eprintln!("{error}");
                return Err(());
            }
        },
        None => AnnotationKeys::default(),
    };

    let annotations: BTreeMap<String, String> = args
        .get_many::<(String, String)>("ANNOTATION")
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    tracing::debug!("inspecting {} annotations", annotations.len());

    let report = Report {
        managed: keys.is_managed(&annotations),
        hostnames: keys.hostnames(&annotations),
        internal_hostnames: keys.internal_hostnames(&annotations),
        targets: group_targets_by_type(keys.targets(&annotations)),
        ttl: keys.ttl(&annotations).into(),
        srv: args
            .get_one::<String>("service")
            .map(|service| keys.srv_values(service, &annotations).into()),
        alias: keys.alias(&annotations),
        access: keys.access(&annotations),
        set_identifier: keys.set_identifier(&annotations),
        provider_specific: keys.provider_specific(&annotations),
    };

    match serde_json::to_string_pretty(&report) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(error) => {
            eprintln!("Error writing report");
            eprintln!("{error}");
            Err(())
        }
    }
}
