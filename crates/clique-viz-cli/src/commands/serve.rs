//! Serve command implementation.
//!
//! Hosts the browser front end and forwards uploads to the solver.
//!
//! ## Architecture
//!
//! - `/` - HTML shell with the upload and result panels
//! - `/pkg/*` - WASM bundle from `--assets`
//!   (output of `wasm-pack build crates/clique-viz-web --target web`)
//! - `/upload` - proxied to `--solver-url`

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clique_viz_api::{create_api_router, create_api_state, ApiConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Execute the serve command.
pub async fn execute(
    port: u16,
    solver_url: String,
    assets: Option<PathBuf>,
) -> Result<()> {
    let mut api_config = ApiConfig::new(solver_url);
    match assets {
        Some(dir) if dir.is_dir() => api_config = api_config.with_assets_dir(dir),
        Some(dir) => warn!(
            dir = %dir.display(),
            "assets directory not found, front end bundle disabled"
        ),
        None => warn!("no assets directory configured, front end bundle disabled"),
    }

    let state = create_api_state(&api_config);
    let app = create_api_router(state, &api_config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, solver = %api_config.solver_url, "serving");

    // Print server info
    println!();
    println!("🚀 k-clique SAT front end");
    println!("   URL:    http://localhost:{}", port);
    println!("   Solver: {}", api_config.solver_url);
    println!();
    println!("   Press Ctrl+C to stop");
    println!();

    axum::serve(listener, app).await?;

    Ok(())
}
