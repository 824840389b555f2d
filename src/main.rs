mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use paddyplan::models::{
    AreaUnit, CostSheet, FieldProfile, Recommendation, ResourcePlan, Scenario, ScenarioOutcome,
};
use paddyplan::{
    Config, PaddyPlanError, PlanningEngine, Result, ScenarioSimulator, UnitNormalizer,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Recommend { json: false }) {
        Commands::Init => {
            Config::setup_interactive(cli.config.as_deref())?;
            Ok(())
        }
        command => report(command, load_config(cli.config)?),
    }
}

fn load_config(config_override: Option<PathBuf>) -> Result<Config> {
    if config_override.is_some() || Config::exists(None) {
        return Config::load(config_override);
    }
    tracing::warn!("No config file found, using the sample field. Run `paddyplan init` to set up.");
    Ok(Config::default())
}

fn report(command: Commands, config: Config) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let field = config.field_profile(today)?;
    let engine = config.engine()?;

    match command {
        Commands::Recommend { json } => {
            let rec = engine.recommend(&field)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rec)?);
            } else {
                print_recommendation(&field, &rec, today);
            }
        }
        Commands::Plan { json } => {
            let plan = engine.plan_inputs(&field);
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&field, &plan);
            }
        }
        Commands::Simulate { scenario } => {
            let acres = UnitNormalizer::from_hectares(field.hectares(), AreaUnit::Acres);
            let scenarios = Scenario::builtin();
            let selected = match scenario {
                Some(name) => vec![ScenarioSimulator::find(&scenarios, &name)?.clone()],
                None => scenarios,
            };
            let outcomes = ScenarioSimulator::compare(&selected, &CostSheet::default())?;
            print_scenarios(&outcomes, acres);
        }
        Commands::Catalog { variety } => match variety {
            Some(name) => print_variety(&engine, &name)?,
            None => print_catalog(&engine),
        },
        Commands::Init => {}
    }

    Ok(())
}

fn print_field(field: &FieldProfile) {
    println!(
        "Field: {} | {} | {} | {} season | {} {} ({:.2} ha)",
        if field.district.is_empty() { "-" } else { field.district.as_str() },
        field.soil_type,
        field.water_availability.short_name(),
        field.season,
        field.field_size.value(),
        field.field_size.unit(),
        field.hectares()
    );
}

fn print_recommendation(field: &FieldProfile, rec: &Recommendation, today: chrono::NaiveDate) {
    println!("Paddy recommendation ({})", today.format("%Y-%m-%d"));
    print_field(field);
    println!();

    let primary = rec.primary.candidate();
    println!(
        "Recommended: {} ({}% confidence)",
        primary.name, rec.primary.confidence
    );
    if !primary.description.is_empty() {
        println!("  {}", primary.description);
    }
    println!("  Duration:   {}", primary.duration);
    println!("  Yield:      {}", primary.yield_label());
    println!("  Price:      {}", primary.price_label());
    println!("  Resistance: {}", primary.resistance_label());
    println!("  Risk:       {}", primary.risk_level);
    println!("  Planting:   {}", rec.planting_window);
    println!();

    if !rec.alternatives.is_empty() {
        println!("Alternatives:");
        for alt in &rec.alternatives {
            println!(
                "  {:<10} {:>3}%  {}",
                alt.name(),
                alt.confidence,
                alt.candidate().yield_label()
            );
        }
        println!();
    }

    let fin = &rec.financials;
    println!("Financial projection (LKR):");
    println!("  Yield:   {:.2} t", fin.total_yield_tons);
    println!("  Revenue: {:.0}", fin.total_revenue);
    println!("  Cost:    {:.0}", fin.total_cost);
    println!(
        "  {}:  {:.0}",
        if fin.is_loss() { "Loss  " } else { "Profit" },
        fin.estimated_profit
    );
    println!();

    println!("Fertilizer: {}", rec.fertilizer_plan);
    println!("Water:      {}", rec.water_requirement);
    println!("Advice:");
    for line in &rec.special_advice {
        println!("  - {}", line);
    }
}

fn print_plan(field: &FieldProfile, plan: &ResourcePlan) {
    print_field(field);
    println!();
    println!("{:<22} {:>10} {:>12}", "Input", "Quantity", "Cost (LKR)");
    println!(
        "{:<22} {:>7} kg {:>12.0}",
        format!("Seed ({})", plan.seed.variety),
        plan.seed.quantity_kg,
        plan.seed.cost_lkr
    );
    for f in &plan.fertilizers {
        println!("{:<22} {:>7} kg {:>12.0}", f.name, f.quantity_kg, f.cost_lkr);
    }
    println!(
        "{:<22} {:>7.1} L  {:>12.0}",
        plan.pesticide.name, plan.pesticide.quantity_liters, plan.pesticide.cost_lkr
    );
    println!("{:<22} {:>10} {:>12.0}", "Total", "", plan.total_cost_lkr);
}

fn print_scenarios(outcomes: &[ScenarioOutcome], acres: f64) {
    println!("Scenario comparison for {:.2} acres (LKR)", acres);
    println!(
        "{:<20} {:>10} {:>12} {:>12} {:>12} {:>8}",
        "Scenario", "Yield kg", "Revenue", "Cost", "Profit", "Margin"
    );
    for outcome in outcomes {
        let field = outcome.scaled(acres);
        println!(
            "{:<20} {:>10.0} {:>12.0} {:>12.0} {:>12.0} {:>7.1}%",
            field.scenario,
            field.yield_kg,
            field.revenue,
            field.total_cost,
            field.profit,
            field.profit_margin_pct
        );
    }
}

fn print_variety(engine: &PlanningEngine, name: &str) -> Result<()> {
    let catalog = engine.catalog();
    let v = catalog
        .find(name)
        .ok_or_else(|| PaddyPlanError::NotFound(format!("variety '{}'", name)))?;

    println!("{}", v.name);
    if !v.description.is_empty() {
        println!("  {}", v.description);
    }
    let soils: Vec<&str> = v.soil_preference.iter().map(|s| s.as_str()).collect();
    println!("  Soils:      {}", soils.join(", "));
    println!("  Water need: {}", v.water_need);
    println!("  Season:     {}", v.season);
    println!("  Duration:   {}", v.duration);
    println!("  Yield:      {}", v.yield_label());
    println!("  Price:      {}", v.price_label());
    println!("  Resistance: {}", v.resistance_label());
    println!("  Risk:       {}", v.risk_level);
    Ok(())
}

fn print_catalog(engine: &PlanningEngine) {
    println!("Scoring rubric:");
    for (_, name, max_points) in engine.scorer().list_criteria() {
        println!("  {:<16} {:>3}", name, max_points);
    }
    println!();

    let catalog = engine.catalog();
    println!("{} varieties", catalog.len());
    for v in catalog.varieties() {
        println!(
            "  {:<10} {:<5} {:<7} water {:<6} {:<14} {}",
            v.name,
            v.season.as_str(),
            v.risk_level.as_str(),
            v.water_need.as_str(),
            v.duration.to_string(),
            v.yield_label()
        );
    }
}
