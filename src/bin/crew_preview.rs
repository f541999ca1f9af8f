//! Crew Preview
//!
//! Lists the crew catalog and dumps the draw calls of the combat overlay
//! widgets, for checking data files and layouts without a browser.

use bota::core::{CombatLayout, Result};
use bota::crew::{CrewRecord, CrewRegistry, DieFaces, DieSlot};
use bota::render::{CanvasSize, Color, DrawSurface, RecordingSurface};
use bota::ui::{render_combat_log, render_reroll_tray, CombatLog, DiceSystem, DiceTrayState, LogEntry};
use clap::Parser;
use std::path::PathBuf;

/// Crew Preview - inspect crew data and overlay rendering
#[derive(Parser, Debug)]
#[command(name = "crew_preview")]
#[command(about = "List crew types and preview combat overlay draw calls")]
struct Args {
    /// Crew catalog TOML file (built-in table when omitted)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Combat layout TOML file (defaults when omitted)
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Show a single crew type
    #[arg(long)]
    id: Option<String>,

    /// Only crews hireable by this faction
    #[arg(long)]
    faction: Option<String>,

    /// Only crews that bring an equipment die
    #[arg(long)]
    equipped: bool,

    /// Print widget draw calls instead of the catalog
    #[arg(long)]
    render: bool,

    /// JSON array of log entries for the combat log (demo log when omitted)
    #[arg(long)]
    log: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let registry = match &args.data {
        Some(path) => {
            let registry = CrewRegistry::load_from_toml(path)?;
            tracing::info!("Loaded {} crew types from {}", registry.len(), path.display());
            registry
        }
        None => CrewRegistry::with_defaults(),
    };

    if args.render {
        let layout = match &args.layout {
            Some(path) => CombatLayout::load_from_toml(path)?,
            None => CombatLayout::default(),
        };
        let log = match &args.log {
            Some(path) => {
                let entries: Vec<LogEntry> = serde_json::from_str(&std::fs::read_to_string(path)?)?;
                CombatLog::from_entries(entries)
            }
            None => demo_log(),
        };
        return preview_widgets(&args, &registry, &layout, &log);
    }

    let selected: Vec<&CrewRecord> = if let Some(id) = &args.id {
        vec![registry.get(id)?]
    } else {
        registry
            .by_faction(args.faction.as_deref())
            .filter(|r| !args.equipped || r.has_equipment())
            .collect()
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&selected)?);
    } else {
        for record in selected {
            print_record(record);
        }
    }
    Ok(())
}

fn print_record(record: &CrewRecord) {
    let faction = record.faction.as_deref().unwrap_or("any");
    println!(
        "{:<14} {:<14} hp {:>3}  faction {}",
        record.id, record.name, record.health, faction
    );
    for (slot, faces) in record.dice() {
        match slot {
            DieSlot::Personal => println!("    personal die: {}", faces),
            DieSlot::Equipment => {
                let equipment = record
                    .equipment_die
                    .as_ref()
                    .map(|d| d.equipment.as_str())
                    .unwrap_or("");
                println!("    equipment die ({}): {}", equipment, faces)
            }
        }
    }
}

fn demo_log() -> CombatLog {
    let mut log = CombatLog::new();
    log.add_log(1, "Combat started: Player Axe vs Enemy Axe!");
    log.add_log(1, "--- Player Axe's Turn 1 ---");
    log.add_log(1, "Counter Helix dealt 4 damage to Enemy Axe! (HP: 26/30)");
    log.add_log(2, "--- Enemy Axe's Turn 2 ---");
    log.add_log(2, "Enemy Axe's armor absorbed 2 damage.");
    log.add_log(2, "Culling Blade dealt 6 damage to Player Axe! (HP: 24/30)");
    log
}

/// Draws each die as a colored square labelled with its faces
struct PreviewDice {
    state: DiceTrayState<DieFaces, ()>,
}

impl PreviewDice {
    fn from_registry(registry: &CrewRegistry) -> Self {
        let dice: Vec<DieFaces> = registry
            .all()
            .iter()
            .flat_map(|r| r.dice().map(|(_, faces)| *faces))
            .collect();
        let states = vec![(); dice.len()];
        let mut state = DiceTrayState::new(dice, states);
        for index in [0, 2, 3] {
            state.toggle_reroll(index);
        }
        Self { state }
    }
}

impl DiceSystem for PreviewDice {
    type Die = DieFaces;
    type DieState = ();

    fn tray_state(&self) -> &DiceTrayState<DieFaces, ()> {
        &self.state
    }

    fn draw_perspective_die(
        &self,
        surface: &mut dyn DrawSurface,
        die: &DieFaces,
        x: f64,
        y: f64,
        size: f64,
        _state: &(),
        index: usize,
    ) {
        let half = size / 2.0;
        surface.set_fill_color(Color::hex(0xeeeeee));
        surface.fill_rect(x - half, y - half, size, size);
        surface.set_fill_color(Color::hex(0x222222));
        surface.fill_text(&format!("#{} {}", index, die), x - half, y);
    }
}

fn preview_widgets(
    args: &Args,
    registry: &CrewRegistry,
    layout: &CombatLayout,
    log: &CombatLog,
) -> Result<()> {
    let canvas = CanvasSize::new(args.width, args.height);
    let dice = PreviewDice::from_registry(registry);

    let mut surface = RecordingSurface::new();
    render_combat_log(&mut surface, canvas, Some(log));
    let log_calls = surface.commands().len();
    render_reroll_tray(&mut surface, canvas, layout, Some(&dice));
    tracing::info!(
        "Combat log issued {} calls, reroll tray {}",
        log_calls,
        surface.commands().len() - log_calls
    );

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(surface.commands())?);
    } else {
        for command in surface.commands() {
            println!("{}", command);
        }
    }
    Ok(())
}
