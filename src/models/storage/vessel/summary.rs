use std::fmt;

use uom::si::{area::square_meter, length::meter, ratio::percent, volume::cubic_meter};

use super::{Vessel, VesselKind};

/// Snapshot of a vessel's dimensions, volumes, and surface areas.
///
/// Values are in SI units (m, m², m³). The [`Display`](fmt::Display)
/// implementation renders a fixed-width plain-text report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub kind: VesselKind,
    pub total_height: f64,
    pub head_volume: f64,
    pub shell_volume: f64,
    pub total_volume: f64,
    pub effective_volume: f64,
    /// Effective volume as a percentage of the total volume.
    pub efficiency: f64,
    pub tangent_volume: f64,
    pub working_volume: f64,
    pub overflow_volume: f64,
    pub liquid_level: f64,
    pub liquid_volume: f64,
    pub head_surface_area: f64,
    pub shell_surface_area: f64,
    pub total_surface_area: f64,
    pub wetted_area: f64,
}

impl Summary {
    pub(super) fn new(vessel: &Vessel) -> Self {
        let level = vessel.liquid_level();
        Self {
            kind: vessel.kind(),
            total_height: vessel.total_height().get::<meter>(),
            head_volume: vessel.head_volume().get::<cubic_meter>(),
            shell_volume: vessel.shell_volume().get::<cubic_meter>(),
            total_volume: vessel.total_volume().get::<cubic_meter>(),
            effective_volume: vessel.effective_volume().get::<cubic_meter>(),
            efficiency: vessel.efficiency_volume().get::<percent>(),
            tangent_volume: vessel.tangent_volume().get::<cubic_meter>(),
            working_volume: vessel.working_volume().get::<cubic_meter>(),
            overflow_volume: vessel.overflow_volume().get::<cubic_meter>(),
            liquid_level: level.get::<meter>(),
            liquid_volume: vessel.liquid_volume(level).get::<cubic_meter>(),
            head_surface_area: vessel.head_surface_area().get::<square_meter>(),
            shell_surface_area: vessel.shell_surface_area().get::<square_meter>(),
            total_surface_area: vessel.total_surface_area().get::<square_meter>(),
            wetted_area: vessel.wetted_area(level).get::<square_meter>(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vessel type     : {}", self.kind)?;
        writeln!(f, "total height : {:.3} m", self.total_height)?;
        writeln!(f, "-- volumes --")?;
        writeln!(f, "head volume            : {:.2} m3", self.head_volume)?;
        writeln!(f, "shell volume           : {:.2} m3", self.shell_volume)?;
        writeln!(f, "total volume           : {:.2} m3", self.total_volume)?;
        writeln!(f, "eff. volume            : {:.2} m3", self.effective_volume)?;
        writeln!(f, "efficiency volume      : {:.2} %", self.efficiency)?;
        writeln!(f, "tangent volume         : {:.2} m3", self.tangent_volume)?;
        writeln!(f, "working volume         : {:.2} m3", self.working_volume)?;
        writeln!(f, "overflow volume        : {:.2} m3", self.overflow_volume)?;
        writeln!(
            f,
            "liquid volume at {:.1} m : {:.2} m3",
            self.liquid_level, self.liquid_volume
        )?;
        writeln!(f, "-- surface area --")?;
        writeln!(f, "heads surface area  : {:.2} m2", self.head_surface_area)?;
        writeln!(f, "shell surface area  : {:.2} m2", self.shell_surface_area)?;
        writeln!(f, "total surface area  : {:.2} m2", self.total_surface_area)?;
        write!(f, "wetted surface area : {:.2} m2", self.wetted_area)
    }
}
