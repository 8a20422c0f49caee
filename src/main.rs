//! NieR.EXPer CLI - save-slot EXP patcher for NieR:Automata
//!
//! Usage: nier-exper <COMMAND>
//!
//! Commands:
//!   patch   Write a new EXP value into the slot binary
//!   show    Print the EXP value currently stored in the slot

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use nier_exper::{
    BinarySlotRepository, Calculator, Config, Experience, ExperienceRepository, SaveOptions, Slot,
};

/// NieR.EXPer - save-slot EXP patcher for NieR:Automata
#[derive(Parser, Debug)]
#[command(name = "nier-exper")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for scripts
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a new EXP value into the slot binary
    Patch {
        /// EXP points to write
        points: i32,

        /// Path to the save-slot file (falls back to config)
        slot: Option<PathBuf>,

        /// Add to the current EXP value instead of replacing it
        #[arg(long)]
        add: bool,

        /// Skip the backup copy before patching
        #[arg(long)]
        no_backup: bool,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the EXP value currently stored in the slot
    Show {
        /// Path to the save-slot file (falls back to config)
        slot: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Patch {
            points,
            slot,
            add,
            no_backup,
            dry_run,
        } => cmd_patch(points, slot, add, no_backup, dry_run, cli.json),
        Commands::Show { slot } => cmd_show(slot, cli.json),
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

/// Pick the slot path from the command line, falling back to config
fn resolve_slot(slot: Option<PathBuf>, config: &Config) -> Result<Slot> {
    let path = slot
        .or_else(|| config.slot.clone())
        .ok_or_else(|| anyhow::anyhow!("no slot path given and none configured in exper.toml"))?;
    Ok(Slot::new(path))
}

fn cmd_patch(
    points: i32,
    slot: Option<PathBuf>,
    add: bool,
    no_backup: bool,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let config = Config::resolve()?;
    let slot = resolve_slot(slot, &config)?;
    let backup = if no_backup { false } else { config.backup };

    let repo = BinarySlotRepository::new(&slot);

    let experience = if add {
        let current = repo.load()?;
        let bump = move |v: i32| v.saturating_add(points);
        Experience::new(bump.calculate(current.points()))
    } else {
        Experience::new(points)
    };

    if !json {
        println!("💾 EXPer Patch");
        println!("Slot: {}", slot);
        println!("Points: {}", experience);
        if !backup {
            println!("Mode: No backup");
        }
        if dry_run {
            println!("Mode: Dry run");
        }
    }

    if dry_run {
        if !slot.exists() {
            anyhow::bail!("slot not found: {}", slot);
        }
        if json {
            let output = serde_json::json!({
                "event": "patch",
                "status": "dry-run",
                "slot": slot.to_string(),
                "points": experience.points(),
                "backup": backup
            });
            println!("{}", serde_json::to_string(&output)?);
        } else {
            println!("\n✓ Would patch EXP to {}", experience);
        }
        return Ok(());
    }

    repo.save(&experience, &SaveOptions { backup })?;

    if json {
        let output = serde_json::json!({
            "event": "patch",
            "status": "success",
            "slot": slot.to_string(),
            "points": experience.points(),
            "backup": backup
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("\n✓ Patched EXP to {}", experience);
        if backup {
            let backup_root = slot
                .directory()
                .unwrap_or(Path::new(""))
                .join(BinarySlotRepository::BACKUP_DIR_NAME);
            println!("Backup: {}", backup_root.display());
        }
    }

    Ok(())
}

fn cmd_show(slot: Option<PathBuf>, json: bool) -> Result<()> {
    let config = Config::resolve()?;
    let slot = resolve_slot(slot, &config)?;

    let repo = BinarySlotRepository::new(&slot);
    let experience = repo.load()?;

    if json {
        let output = serde_json::json!({
            "event": "show",
            "slot": slot.to_string(),
            "points": experience.points()
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("🔍 EXPer Show");
        println!("Slot: {}", slot);
        println!("\nEXP: {}", experience);
    }

    Ok(())
}
