use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use orrery::{config::SystemConfig, prelude::*};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Order {
    Simultaneous,
    Sequential,
}

impl From<Order> for UpdateOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Simultaneous => UpdateOrder::Simultaneous,
            Order::Sequential => UpdateOrder::Sequential,
        }
    }
}

/// Headless gravitational N-body simulation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML system description (defaults to the built-in inner solar system).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of steps to simulate.
    #[arg(short, long, default_value_t = 365)]
    steps: usize,

    /// Log the state of every body each N steps (0 to disable).
    #[arg(short, long, default_value_t = 0)]
    report_every: usize,

    /// Override the update order of the description.
    #[arg(long, value_enum)]
    update_order: Option<Order>,

    /// Compute forces on multiple threads.
    #[arg(long)]
    parallel: bool,

    /// Print the system description as TOML and exit.
    #[arg(long)]
    print_config: bool,
}

fn load_system(args: &Args) -> Result<SystemConfig> {
    let mut config = match &args.config {
        Some(path) => SystemConfig::load(path)?,
        None => SystemConfig::from_bodies(&scenario::solar_system()?),
    };

    if let Some(order) = args.update_order {
        config.update_order = order.into();
    }

    Ok(config)
}

fn advance(simulator: &mut Simulator, parallel: bool) -> orrery::Result<()> {
    #[cfg(feature = "parallel")]
    if parallel {
        return simulator.step_with(orrery::compute_method::parallel::BruteForce);
    }

    #[cfg(not(feature = "parallel"))]
    if parallel {
        log::warn!("built without the \"parallel\" feature, computing forces on one thread");
    }

    simulator.step()
}

fn describe(body: &Body) -> String {
    if body.is_anchor() {
        body.name().to_owned()
    } else {
        format!(
            "{} [{:.3} AU, {:.3} AU]",
            body.name(),
            meters_to_au(body.min_distance()),
            meters_to_au(body.max_distance()),
        )
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_system(&args).context("failed to load system")?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let mut simulator = config.build().context("invalid system")?;
    info!(
        "simulating {} bodies for {} steps of {} s ({:?} update)",
        simulator.bodies().len(),
        args.steps,
        simulator.timestep(),
        simulator.update_order(),
    );

    for step in 1..=args.steps {
        advance(&mut simulator, args.parallel)
            .with_context(|| format!("simulation failed at step {step}"))?;

        if args.report_every != 0 && step % args.report_every == 0 {
            for body in simulator.iter() {
                let position = body.position();
                info!(
                    "step {step}: {} at ({:.3}, {:.3}) AU",
                    describe(body),
                    meters_to_au(position.x),
                    meters_to_au(position.y),
                );
            }
        }
    }

    println!("after {:.1} days:", simulator.elapsed() / (24.0 * 3600.0));
    for body in simulator.iter() {
        println!("  {}", describe(body));
    }

    Ok(())
}
