//! Sideline CLI
//!
//! Terminal consumer of the public coordinator surface: prints rotation
//! boards and dry-runs live sessions second by second. Handy for checking a
//! plan before a game without opening the app.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};

use sideline_core::{
    build_plan, GameConfig, GameSessionCoordinator, Player, SubstitutionStyle,
};

#[derive(Parser)]
#[command(name = "sideline")]
#[command(about = "Rotation plans and game-clock dry runs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    Long,
    Short,
}

impl From<StyleArg> for SubstitutionStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Long => SubstitutionStyle::Long,
            StyleArg::Short => SubstitutionStyle::Short,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rotation board for a roster
    Plan {
        /// Comma-separated player names, in roster order
        #[arg(long)]
        players: String,

        /// Players on the field at once
        #[arg(long, default_value = "4")]
        on_field: usize,

        /// Number of periods
        #[arg(long, default_value = "4")]
        periods: u32,

        /// Period length in minutes
        #[arg(long, default_value = "10")]
        minutes: u32,

        /// Substitution style
        #[arg(long, value_enum, default_value = "short")]
        style: StyleArg,
    },

    /// Dry-run a full game, printing every substitution moment
    Simulate {
        /// Comma-separated player names, in roster order
        #[arg(long)]
        players: String,

        /// Players on the field at once
        #[arg(long, default_value = "4")]
        on_field: usize,

        /// Number of periods
        #[arg(long, default_value = "4")]
        periods: u32,

        /// Period length in minutes
        #[arg(long, default_value = "10")]
        minutes: u32,

        /// Substitution style
        #[arg(long, value_enum, default_value = "short")]
        style: StyleArg,
    },
}

fn parse_roster(players: &str) -> Result<Vec<Player>> {
    let roster: Vec<Player> = players
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Player::new)
        .collect();
    if roster.is_empty() {
        bail!("roster is empty; pass --players \"Ana,Ben,...\"");
    }
    Ok(roster)
}

fn names(players: &[Player]) -> String {
    players.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ")
}

fn format_clock(seconds: f64) -> String {
    let total = seconds.round() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

fn print_plan(
    roster: &[Player],
    on_field: usize,
    periods: u32,
    minutes: u32,
    style: SubstitutionStyle,
) {
    let plan = build_plan(roster, on_field, minutes, periods, style);
    println!(
        "{} players, {} on field, {}x{}min, {:?} rotations",
        roster.len(),
        on_field,
        periods,
        minutes,
        style
    );
    if plan.is_empty() {
        println!("(empty roster: nothing to rotate)");
        return;
    }
    println!("segment length: {:.1}s", plan.sub_duration);
    for (index, segment) in plan.segments.iter().enumerate() {
        println!(
            "  #{index:2}  {} - {}  {}",
            format_clock(segment.on_time),
            format_clock(segment.off_time),
            names(&segment.players)
        );
    }
}

fn simulate(
    roster: Vec<Player>,
    on_field: usize,
    periods: u32,
    minutes: u32,
    style: SubstitutionStyle,
) {
    let config = GameConfig {
        players_on_field: on_field,
        number_of_periods: periods,
        period_length_minutes: minutes,
        style,
        players: roster,
    };
    let mut session = GameSessionCoordinator::new(config);

    for quarter in 1..=periods {
        session.toggle_play_pause();
        println!("--- quarter {quarter} ---");
        println!("  00:00  on field: {}", names(session.current_players()));

        let mut last_group = session.current_players().to_vec();
        for second in 1..=minutes * 60 {
            let snapshot = session.poll_at(second);
            if snapshot.current_players != last_group {
                println!(
                    "  {}  sub: {}  (bench: {})",
                    format_clock(f64::from(second)),
                    names(&snapshot.current_players),
                    names(&snapshot.bench_players)
                );
                last_group = snapshot.current_players;
            }
        }
    }
    println!("--- full time ---");
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { players, on_field, periods, minutes, style } => {
            let roster = parse_roster(&players)?;
            print_plan(&roster, on_field, periods, minutes, style.into());
        }
        Commands::Simulate { players, on_field, periods, minutes, style } => {
            let roster = parse_roster(&players)?;
            simulate(roster, on_field, periods, minutes, style.into());
        }
    }
    Ok(())
}
