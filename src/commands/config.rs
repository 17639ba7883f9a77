//! `netlab config` subcommands

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::render::print_json;
use netlab_core::config::NetlabConfig;
use netlab_core::error::Result;

/// Print the effective configuration
pub fn execute_show(cli: &Cli, config: &NetlabConfig) -> Result<()> {
    crate::output_by_format!(cli.format,
        json => { print_json(config)? },
        human => { print!("{}", config.to_toml()?) },
        records => {
            let dv = &config.distance_vector;
            let layout = &config.layout;
            println!(
                "H netlab=1 records=1 mode=config id_scheme={} strategy={} max_rounds={} interval_ms={} width={} height={} radius_factor={}",
                config.id_scheme,
                dv.strategy,
                dv.max_rounds,
                dv.interval_ms,
                layout.width,
                layout.height,
                layout.radius_factor
            );
        }
    );
    Ok(())
}

/// Write the default configuration to the default location
pub fn execute_init(cli: &Cli, force: bool) -> Result<()> {
    let path = NetlabConfig::default_path()?;
    if path.exists() && !force {
        netlab_core::bail_usage!(format!(
            "config file already exists: {} (use --force to overwrite)",
            path.display()
        ));
    }

    NetlabConfig::default().save(&path)?;
    tracing::info!(path = %path.display(), "wrote default config");

    crate::output_by_format!(cli.format,
        json => { print_json(&PathReport { path: path.display().to_string(), exists: true })? },
        human => {
            if !cli.quiet {
                println!("Wrote {}", path.display());
            }
        },
        records => { println!("H netlab=1 records=1 mode=config-init path={}", path.display()) }
    );
    Ok(())
}

#[derive(Debug, Serialize)]
struct PathReport {
    path: String,
    exists: bool,
}

/// Print where the default configuration file lives
pub fn execute_path(cli: &Cli) -> Result<()> {
    let path = NetlabConfig::default_path()?;
    let report = PathReport {
        path: path.display().to_string(),
        exists: path.exists(),
    };

    crate::output_by_format!(cli.format,
        json => { print_json(&report)? },
        human => { println!("{}", report.path) },
        records => {
            println!(
                "H netlab=1 records=1 mode=config-path path={} exists={}",
                report.path, report.exists
            )
        }
    );
    Ok(())
}
