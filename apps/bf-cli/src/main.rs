use bf_boiler::{BoilerOutput, BoilerParams, BoilerSimulator, FuelKind};
use bf_core::units::celsius_from_fahrenheit;
use bf_scenario::{Scenario, ScenarioResult};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bf-cli")]
#[command(about = "boilerflow CLI - steady-state boiler simulation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Run one steady-state simulation
    Simulate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Print the result as pretty JSON instead of a report
        #[arg(long)]
        json: bool,
        /// Boiler parameter override file (YAML), replacing the scenario's
        #[arg(long)]
        params: Option<PathBuf>,
    },
    /// List supported fuel kinds
    Fuels,
}

fn main() -> ScenarioResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Simulate {
            scenario_path,
            json,
            params,
        } => cmd_simulate(&scenario_path, json, params.as_deref()),
        Commands::Fuels => cmd_fuels(),
    }
}

fn cmd_validate(scenario_path: &Path) -> ScenarioResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = bf_scenario::load_yaml(scenario_path)?;
    println!("✓ Scenario '{}' is valid", scenario.name);
    Ok(())
}

fn cmd_simulate(scenario_path: &Path, json: bool, params_path: Option<&Path>) -> ScenarioResult<()> {
    let scenario = bf_scenario::load_yaml(scenario_path)?;
    let params = match params_path {
        Some(path) => load_params_override(path)?,
        None => scenario.params.clone(),
    };

    let sim = BoilerSimulator::reference(params);
    let output = sim.simulate(&scenario.inputs());

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&scenario, &output);
    }
    Ok(())
}

fn load_params_override(path: &Path) -> ScenarioResult<BoilerParams> {
    let content = std::fs::read_to_string(path)?;
    let params: BoilerParams = serde_yaml::from_str(&content)?;
    bf_scenario::validate_params(&params)?;
    Ok(params)
}

fn print_report(scenario: &Scenario, output: &BoilerOutput) {
    println!("✓ Simulation complete: {}", scenario.name);

    println!("\nSteam:");
    println!("  Flow rate:    {:.2} lb/h", output.steam.flow_rate_pph);
    println!("  Pressure:     {:.1} psig", output.steam.pressure_psig);
    println!(
        "  Temperature:  {:.1} °F ({:.1} °C)",
        output.steam.temperature_f,
        celsius_from_fahrenheit(output.steam.temperature_f)
    );

    println!("\nFlue gas:");
    println!(
        "  Volume:       {:.0} ft³/h",
        output.flue_gases.volume_cf_per_h
    );
    println!(
        "  Temperature:  {:.1} °C",
        output.flue_gases.temperature_c
    );
    let split: Vec<String> = output
        .flue_gases
        .composition
        .iter()
        .map(|(species, pct)| format!("{} {:.1}%", species.key(), pct))
        .collect();
    println!("  Composition:  {}", split.join("  "));

    println!("\nEmissions:");
    for (pollutant, rate) in output.emissions.iter() {
        println!("  {:<4} {:.1} lb/h", pollutant.key(), rate);
    }

    println!("\nWaste heat:     {:.0} BTU/h", output.waste_heat_btu_per_h);
}

fn cmd_fuels() -> ScenarioResult<()> {
    println!("Supported fuel kinds:");
    for kind in FuelKind::ALL {
        println!("  {:<12} {}", kind.key(), kind.display_name());
    }
    Ok(())
}
