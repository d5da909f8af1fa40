//! Hospital & library services
//!
//! ```text
//! ┌──────────┐    ┌───────────────┐    ┌────────────────┐
//! │  Config  │───▶│ hospital :8000│───▶│ HospitalStore  │
//! │  (YAML)  │    ├───────────────┤    ├────────────────┤
//! │          │───▶│ library  :8001│───▶│ LibraryStore   │
//! └──────────┘    └───────────────┘    └────────────────┘
//! ```
//!
//! Usage: `hospital_library [--env dev] [--service hospital|library|all]
//!         [--hospital-port N] [--library-port N]`

use std::sync::Arc;

use anyhow::bail;
use hospital_library::config::AppConfig;
use hospital_library::{gateway, hospital, library};

fn get_arg(names: &[&str]) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if names.contains(&args[i].as_str()) && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn get_env() -> String {
    get_arg(&["--env", "-e"]).unwrap_or_else(|| "dev".to_string())
}

/// Port override from command line
fn get_port_override(flag: &str) -> anyhow::Result<Option<u16>> {
    match get_arg(&[flag]) {
        Some(raw) => match raw.parse() {
            Ok(port) => Ok(Some(port)),
            Err(_) => bail!("invalid value for {}: {}", flag, raw),
        },
        None => Ok(None),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServiceSelection {
    Hospital,
    Library,
    All,
}

fn get_service_selection() -> anyhow::Result<ServiceSelection> {
    match get_arg(&["--service", "-s"]).as_deref() {
        None | Some("all") => Ok(ServiceSelection::All),
        Some("hospital") => Ok(ServiceSelection::Hospital),
        Some("library") => Ok(ServiceSelection::Library),
        Some(other) => bail!("unknown service '{}' (hospital|library|all)", other),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    let _log_guard = hospital_library::logging::init_logging(&app_config);

    tracing::info!(
        "Starting hospital_library ({}) in {} mode",
        env!("GIT_HASH"),
        env
    );

    if let Some(port) = get_port_override("--hospital-port")? {
        app_config.hospital.port = port;
    }
    if let Some(port) = get_port_override("--library-port")? {
        app_config.library.port = port;
    }

    let selection = get_service_selection()?;
    let run_hospital = app_config.hospital.enabled && selection != ServiceSelection::Library;
    let run_library = app_config.library.enabled && selection != ServiceSelection::Hospital;

    let hospital_task = async {
        if !run_hospital {
            tracing::info!("[hospital] disabled");
            return Ok(());
        }
        let state = Arc::new(hospital::HospitalState::seeded());
        gateway::run_server(
            hospital::handlers::SERVICE_NAME,
            &app_config.hospital.bind_addr(),
            hospital::router(state),
        )
        .await
    };

    let library_task = async {
        if !run_library {
            tracing::info!("[library] disabled");
            return Ok(());
        }
        let state = Arc::new(library::LibraryState::seeded());
        gateway::run_server(
            library::handlers::SERVICE_NAME,
            &app_config.library.bind_addr(),
            library::router(state),
        )
        .await
    };

    tokio::try_join!(hospital_task, library_task)?;
    tracing::info!("All services stopped");
    Ok(())
}
