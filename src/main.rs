use solsim::{Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let scenario_cfg = load_scenario_from_yaml()?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    let mut sim = scenario.into_simulation();
    sim.run()?;
    sim.detect_alignments();

    // Orbital period of each body around the center
    for b in sim.system.bodies.iter().skip(1) {
        match b.orbital_period {
            Some(period) => println!("{} orbital period: {:.4}", b.name, period),
            None => println!("{} orbital period: not resolved within the run", b.name),
        }
    }

    // Relative energy drift over the run
    if let (Some((_, e0)), Some((_, e_last))) = (sim.energy_log.first(), sim.energy_log.last()) {
        println!("relative energy drift: {:.3e}", ((e_last - e0) / e0).abs());
    }

    println!("{} alignment events", sim.alignment_log.len());
    for t in &sim.alignment_log {
        println!("alignment at t = {t:.4}");
    }

    Ok(())
}
