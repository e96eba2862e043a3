//! Entry point for the ROI Engine binary.
//!
//! Running this binary starts an HTTP server exposing the ROI
//! calculation API.  A JSON file overriding the built-in cost tables
//! may be specified via the `ROI_COST_TABLE` environment variable;
//! if unset (or unreadable) the compiled-in defaults are used.  The
//! bind address comes from `ROI_BIND_ADDR`.

use roi_engine::costs::CostTable;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    // Resolve the cost table, falling back to defaults on any problem
    let costs = match std::env::var("ROI_COST_TABLE") {
        Ok(path) => {
            let path = PathBuf::from(path);
            match CostTable::load_from_file(&path) {
                Ok(table) => table,
                Err(err) => {
                    eprintln!("Failed to load cost table {:?}: {}", path, err);
                    CostTable::default()
                }
            }
        }
        Err(_) => CostTable::default(),
    };
    // Determine bind address
    let addr = std::env::var("ROI_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    if let Err(err) = roi_engine::api::serve(&addr, costs).await {
        eprintln!("Error running server: {}", err);
    }
}
