//! Version command implementation

use crate::error::Result;
use crate::operations::create::execution::ASP_VERSION;

/// Run version command
pub fn run() -> Result<()> {
    println!("agent-starter-pack {ASP_VERSION}");
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
