use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cesafi_standings::api::{build_router, state::AppState};
use cesafi_standings::calculate::round_labels;
use cesafi_standings::config::AppConfig;
use cesafi_standings::models::{
    BracketStandings, BracketTeam, GroupStageStandings, Standings, StandingsFilters,
    StandingsResponse,
};
use cesafi_standings::standings::StandingsService;
use cesafi_standings::storage::{
    check_tables, demo_data, validate, EntityType, JsonlStore, LeagueData, StorageConfig,
};

#[derive(Parser)]
#[command(name = "cesafi-standings")]
#[command(about = "Group tables and playoff brackets for CESAFI competition stages")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print standings for a stage
    Standings {
        #[arg(long)]
        season: String,

        #[arg(long)]
        sport: String,

        #[arg(long)]
        category: String,

        /// Stage id, defaults to the first stage
        #[arg(long)]
        stage: Option<String>,

        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the league tables for integrity problems
    Validate,

    /// Write a sample league into the data directory
    InitDemo {
        /// Overwrite existing tables
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    let (text_layer, json_layer) = if cli.json_logs {
        (None, Some(tracing_subscriber::fmt::layer().json()))
    } else {
        (Some(tracing_subscriber::fmt::layer()), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text_layer)
        .with(json_layer)
        .init();

    tracing::info!("Starting cesafi-standings v{}", env!("CARGO_PKG_VERSION"));

    let storage = StorageConfig::new(config.data_dir.clone());

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let store = Arc::new(JsonlStore::new(storage));
            let state = AppState::new(store, config.server.cors_origin.clone());
            let app = build_router(state);

            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Serving standings on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Standings {
            season,
            sport,
            category,
            stage,
            json,
        } => {
            let service = StandingsService::new(Arc::new(JsonlStore::new(storage)));
            let filters = StandingsFilters {
                season_id: Some(season.into()),
                sport_id: Some(sport.into()),
                sport_category_id: Some(category.into()),
                stage_id: stage.map(Into::into),
            };
            let response = service.get_standings(&filters).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_response(&response);
            }
        }
        Commands::Validate => {
            let mut issues = check_tables(&storage)?;
            let data = LeagueData::load(&storage)?;
            issues.extend(validate(&data));

            println!("\n=== Integrity Report ===");
            println!("Matches:      {}", data.matches.len());
            println!("Participants: {}", data.match_participants.len());
            println!("Stages:       {}", data.stages.len());

            if issues.is_empty() {
                println!("\nNo problems found.");
            } else {
                println!("\nProblems:");
                for issue in &issues {
                    println!("  - {}", issue);
                }
                bail!("{} integrity problem(s) found", issues.len());
            }
        }
        Commands::InitDemo { force } => {
            if storage.entity_path(EntityType::Season).exists() && !force {
                bail!(
                    "Tables already exist in {:?}; pass --force to overwrite",
                    storage.tables_dir()
                );
            }
            let rows = demo_data().save(&storage)?;
            println!("Wrote {} rows to {:?}", rows, storage.tables_dir());
        }
    }

    Ok(())
}

fn print_response(response: &StandingsResponse) {
    let nav = &response.navigation;
    println!(
        "\n=== {} {} {} ===",
        nav.season.name, nav.category.name, nav.sport.name
    );
    let stages: Vec<String> = nav
        .stages
        .iter()
        .map(|s| format!("{} ({})", s.name, s.id))
        .collect();
    println!("Stages: {}\n", stages.join(", "));

    match &response.standings {
        Standings::GroupStage(table) => print_group_table(table),
        Standings::Bracket(bracket) => print_bracket(bracket),
    }
}

fn print_group_table(table: &GroupStageStandings) {
    println!("{}", table.stage_name);
    for group in &table.groups {
        if let Some(name) = &group.group_name {
            println!("\n{}", name);
        }
        println!(
            "{:>3}  {:<28} {:>3} {:>3} {:>3} {:>3} {:>5} {:>5} {:>5} {:>4}",
            "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
        );
        for e in &group.teams {
            println!(
                "{:>3}  {:<28} {:>3} {:>3} {:>3} {:>3} {:>5} {:>5} {:>+5} {:>4}",
                e.position,
                e.team_name,
                e.matches_played,
                e.wins,
                e.draws,
                e.losses,
                e.goals_for,
                e.goals_against,
                e.goal_difference,
                e.points
            );
        }
    }
}

fn print_bracket(bracket: &BracketStandings) {
    println!("{}", bracket.stage_name);
    let labels = round_labels(&bracket.bracket);

    let mut current_round = 0;
    for m in &bracket.bracket {
        if m.round != current_round {
            current_round = m.round;
            if let Some(label) = labels.get(&m.round) {
                println!("\n{}", label);
            }
        }
        println!(
            "  {:<16} {} vs {}  [{}]",
            m.match_name,
            side(m.team1.as_ref()),
            side(m.team2.as_ref()),
            m.match_status
        );
        if let Some(winner) = &m.winner {
            println!("  {:<16} winner: {}", "", winner.name);
        }
    }
}

fn side(team: Option<&BracketTeam>) -> String {
    match team {
        Some(t) => match t.score {
            Some(score) => format!("{} ({})", t.name, score),
            None => t.name.clone(),
        },
        None => "TBD".to_string(),
    }
}
