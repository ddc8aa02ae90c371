//! Replay a recorded track through a navigation session.
//!
//! Reads one route record (JSON) and a newline-delimited JSON file of
//! position records, feeds the fixes to a session in order and prints a
//! status line after each one.
//!
//! Usage:
//!   cargo run -p wayfinder_session --bin wayfinder-replay -- [OPTIONS]
//!
//! Options:
//!   -r, --route <FILE>       Route record JSON (required)
//!   -p, --positions <FILE>   Position records, one JSON object per line (required)
//!   -c, --config <FILE>      Session configuration TOML
//!
//! Set `RUST_LOG=debug` for per-fix tracker logs.

use std::env;
use std::path::PathBuf;
use std::process;

use log::error;
use wayfinder_core::NavigationPosition;
use wayfinder_session::{
    parse_position_lines, NavigationSession, RouteRecord, SessionConfig, SessionError,
    StatusLine,
};

struct Args {
    route: PathBuf,
    positions: PathBuf,
    config: Option<PathBuf>,
}

fn parse_args() -> Args {
    let mut route = None;
    let mut positions = None;
    let mut config = None;

    let raw: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < raw.len() {
        match raw[i].as_str() {
            "-r" | "--route" => {
                i += 1;
                route = Some(path_arg(&raw, i, "route"));
            }
            "-p" | "--positions" => {
                i += 1;
                positions = Some(path_arg(&raw, i, "positions"));
            }
            "-c" | "--config" => {
                i += 1;
                config = Some(path_arg(&raw, i, "config"));
            }
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let (Some(route), Some(positions)) = (route, positions) else {
        eprintln!("Error: --route and --positions are required");
        print_usage();
        process::exit(1);
    };

    Args {
        route,
        positions,
        config,
    }
}

fn path_arg(raw: &[String], i: usize, name: &str) -> PathBuf {
    raw.get(i).map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("Error: --{name} requires a value");
        process::exit(1);
    })
}

fn print_usage() {
    eprintln!(
        "Usage: wayfinder-replay --route <FILE> --positions <FILE> [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 -r, --route <FILE>       Route record JSON\n\
         \x20 -p, --positions <FILE>   Position records, one JSON object per line\n\
         \x20 -c, --config <FILE>      Session configuration TOML\n\
         \x20 -h, --help               Show this help"
    );
}

async fn replay(args: Args) -> Result<(), SessionError> {
    let config = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };

    let record: RouteRecord =
        serde_json::from_str(&tokio::fs::read_to_string(&args.route).await?)?;
    let route = record.to_route()?;
    let fixes = parse_position_lines(&tokio::fs::read_to_string(&args.positions).await?)?;

    println!(
        "=== wayfinder replay: '{}' ({} waypoints, {} fixes) ===",
        record.name,
        route.waypoint_count(),
        fixes.len()
    );

    let (handle, task) = NavigationSession::spawn(&config);
    handle.start(route).await?;
    println!("{}", StatusLine::from_state(&handle.state()));

    for fix in fixes {
        handle.push_position(NavigationPosition::from(fix)).await?;
        handle.flush().await?;
        let state = handle.state();
        println!("{}", StatusLine::from_state(&state));
        if !state.is_navigating() {
            break;
        }
    }

    handle.shutdown().await?;
    task.await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args();
    if let Err(e) = replay(args).await {
        error!("replay failed: {e}");
        process::exit(1);
    }
}
