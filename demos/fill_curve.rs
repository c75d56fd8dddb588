//! Plots the normalized fill curve of a vessel.
//!
//! # Usage
//!
//! ```text
//! cargo run --example fill_curve
//! cargo run --example fill_curve -- horizontal-torispherical-vessel
//! RUST_LOG=twine_vessels=debug cargo run --example fill_curve -- vertical-conical-tank 1.2
//! ```
//!
//! The first argument is a vessel kind key (see `VesselKind::ALL`), the second
//! the cone depth in metres for conical heads. The vessel summary is printed
//! and an interactive window shows volume and wetted-area fractions against
//! the height fraction.

use std::error::Error;

use twine_observers::{PlotObserver, ShowConfig};
use twine_vessels::models::storage::vessel::{Vessel, VesselKind};
use uom::si::{f64::Length, length::meter};

const STEPS: usize = 50;

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything. Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let kind: VesselKind = args
        .next()
        .as_deref()
        .unwrap_or("vertical-torispherical-vessel")
        .parse()?;
    let cone_depth: f64 = args.next().as_deref().unwrap_or("0.8").parse()?;

    let mut vessel = Vessel::new(kind, Length::new::<meter>(3.0), Length::new::<meter>(9.0))?;
    if kind.requires_head_distance() {
        vessel.set_head_distance(Length::new::<meter>(cone_depth))?;
    }
    let height = vessel.total_height();
    vessel.set_levels(height * 0.2, height * 0.8)?;
    vessel.set_liquid_level(height * 0.5)?;

    println!("{}", vessel.summary());

    let mut obs = PlotObserver::<2>::new(["Volume", "Wetted area"]);
    for point in vessel.sample(STEPS) {
        obs.record(point.height, [Some(point.volume), Some(point.wetted_area)]);
    }

    obs.show(ShowConfig::new().title(format!("{kind}: fill curve")).legend())?;

    Ok(())
}
