//! Lexcite CLI - plan and execute citation research runs.

mod cli;
mod output;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use lexcite_domain::traits::OpinionSearch;
use lexcite_domain::{Jurisdiction, OpinionHit};
use lexcite_engine::{EngineConfig, ResearchEngine, ResearchRequest};
use lexcite_planner::QueryPlanner;
use lexcite_report::TracingAudit;
use lexcite_search::{CourtListenerClient, JsonCheckpoint, MockSearch, DEFAULT_ENDPOINT};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, PlanArgs, RunArgs};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Plan(args) => plan(args, cli.json),
        Command::Run(args) => execute(args, cli.json).await,
    }
}

fn load_request(path: &Path) -> anyhow::Result<ResearchRequest> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading request file {}", path.display()))?;
    serde_json::from_str(&contents).context("parsing research request")
}

fn plan(args: PlanArgs, json: bool) -> anyhow::Result<()> {
    let request = load_request(&args.request)?;
    let jurisdiction = Jurisdiction::resolve(&request.jurisdiction);
    let plan = QueryPlanner::default_config().plan(&request.propositions, &jurisdiction);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan.tasks)?);
    } else {
        println!("{}", output::format_plan(&plan));
    }
    Ok(())
}

async fn execute(args: RunArgs, json: bool) -> anyhow::Result<()> {
    let request = load_request(&args.request)?;
    let checkpoint = JsonCheckpoint::new(&args.checkpoint_dir)
        .with_context(|| format!("opening checkpoint dir {}", args.checkpoint_dir.display()))?;

    let outcome = if args.live {
        let endpoint = args.api_url.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        let client = CourtListenerClient::new(endpoint, args.token.clone());
        run_engine(client, checkpoint, &request).await?
    } else {
        let mock = load_fixtures(args.fixtures.as_deref())?;
        run_engine(mock, checkpoint, &request).await?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", output::format_outcome(&outcome));
    }
    Ok(())
}

async fn run_engine<S>(
    provider: S,
    checkpoint: JsonCheckpoint,
    request: &ResearchRequest,
) -> anyhow::Result<lexcite_engine::ResearchOutcome>
where
    S: OpinionSearch + Send + Sync + 'static,
{
    let mut engine = ResearchEngine::new(provider, checkpoint, TracingAudit, EngineConfig::default());
    engine
        .run(request)
        .await
        .context("citation research run failed")
}

/// Offline provider seeded from a fixtures file (query -> hits)
fn load_fixtures(path: Option<&Path>) -> anyhow::Result<MockSearch> {
    let Some(path) = path else {
        return Ok(MockSearch::new());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading fixtures file {}", path.display()))?;
    let fixtures: HashMap<String, Vec<OpinionHit>> =
        serde_json::from_str(&contents).context("parsing fixtures")?;

    let mut mock = MockSearch::new();
    for (query, hits) in fixtures {
        mock = mock.with_hits(query, hits);
    }
    Ok(mock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexcite_domain::{Proposition, ServiceTier};

    #[test]
    fn test_load_request_roundtrip() {
        let request = ResearchRequest {
            order_id: "ord-1".to_string(),
            jurisdiction: "19th Judicial District Court".to_string(),
            controlling_circuit: None,
            motion_type: "Motion to Compel".to_string(),
            service_tier: ServiceTier::Standard,
            propositions: vec![Proposition::new(
                "compel discovery responses",
                true,
                vec!["compel discovery responses".to_string()],
            )],
            run_id: None,
            signals: Default::default(),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        fs::write(&path, serde_json::to_string_pretty(&request).unwrap()).unwrap();

        let loaded = load_request(&path).unwrap();
        assert_eq!(loaded.order_id, "ord-1");
        assert_eq!(loaded.propositions.len(), 1);
    }

    #[test]
    fn test_load_fixtures_empty_when_absent() {
        let mock = load_fixtures(None).unwrap();
        assert!(mock.calls().is_empty());
    }
}
