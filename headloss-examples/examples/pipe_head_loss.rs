//! # Pipe Head Loss
//!
//! Computes the frictional head loss along a 100 m run of 0.3 m commercial
//! steel pipe carrying 0.05 m³/s of water, once with every Darcy friction
//! factor method and once with Hazen-Williams, and prints a comparison table.
//!
//! It also reports which method the regime-based automatic choice picks.
//! The Colebrook-White row is solved with iteration tracing on, so the
//! successive friction factor estimates are printed below the table.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example pipe_head_loss
//! ```

use std::error::Error;

use headloss_hydraulics::{
    FlowConditions, FrictionMethod, HazenWilliamsSpec, HeadLossMethod, PipeFlowSpec,
    PipeGeometry, evaluate, evaluate_with, friction::colebrook_white::ColebrookConfig,
};
use uom::si::{
    f64::{KinematicViscosity, Length, VolumeRate},
    kinematic_viscosity::square_meter_per_second,
    length::{meter, millimeter},
    velocity::meter_per_second,
    volume_rate::cubic_meter_per_second,
};

fn main() -> Result<(), Box<dyn Error>> {
    let geometry = PipeGeometry::new(
        Length::new::<meter>(0.3),
        Length::new::<meter>(100.0),
        Length::new::<millimeter>(0.15),
    )?;
    let flow = FlowConditions::new(
        VolumeRate::new::<cubic_meter_per_second>(0.05),
        KinematicViscosity::new::<square_meter_per_second>(1.0e-6),
    )?;

    println!("{:<34} {:>10} {:>12} {:>12}", "method", "f", "h_L [m]", "iterations");

    let mut trace = Vec::new();
    for method in FrictionMethod::ALL {
        let spec = PipeFlowSpec {
            geometry,
            flow,
            method: HeadLossMethod::DarcyWeisbach(method),
        };
        let report = evaluate_with(&spec, &ColebrookConfig::traced())?;

        let Some(details) = report.darcy_weisbach else {
            continue;
        };
        let diagnostics = &details.friction.diagnostics;
        let iterations = diagnostics
            .iterations
            .map_or_else(|| "-".to_string(), |n| n.to_string());

        println!(
            "{:<34} {:>10.5} {:>12.4} {:>12}",
            report.result.method.to_string(),
            details.friction.value,
            report.result.head_loss.get::<meter>(),
            iterations,
        );
        for advisory in &diagnostics.advisories {
            println!("    note: {advisory}");
        }

        if method == FrictionMethod::ColebrookWhite {
            trace.clone_from(&diagnostics.trace);
        }
    }

    let spec = PipeFlowSpec {
        geometry,
        flow,
        method: HeadLossMethod::HazenWilliams(HazenWilliamsSpec { coefficient: 130.0 }),
    };
    let report = evaluate(&spec)?;
    println!(
        "{:<34} {:>10} {:>12.4} {:>12}",
        report.result.method.to_string(),
        "-",
        report.result.head_loss.get::<meter>(),
        "-",
    );

    let spec = PipeFlowSpec {
        geometry,
        flow,
        method: HeadLossMethod::DarcyWeisbachAuto,
    };
    let auto = evaluate(&spec)?;

    println!();
    println!("regime-based choice: {}", auto.result.method);
    println!(
        "mean velocity: {:.4} m/s",
        report.velocity.get::<meter_per_second>()
    );
    println!("Colebrook-White iterates:");
    for (i, f) in trace.iter().enumerate() {
        println!("  {:>2}: {f:.8}", i + 1);
    }

    Ok(())
}
