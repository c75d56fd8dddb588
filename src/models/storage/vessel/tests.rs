use std::f64::consts::PI;

use approx::assert_relative_eq;
use uom::si::{
    area::square_meter,
    f64::{Length, Volume, VolumeRate},
    length::meter,
    time::second,
    volume::cubic_meter,
    volume_rate::cubic_meter_per_second,
};

use crate::support::constraint::ConstraintError;

use super::*;

fn m(value: f64) -> Length {
    Length::new::<meter>(value)
}

fn m3(volume: Volume) -> f64 {
    volume.get::<cubic_meter>()
}

/// Every kind at diameter 2 m and length 3 m, with 0.8 m cones.
fn catalog() -> impl Iterator<Item = Vessel> {
    VesselKind::ALL.into_iter().map(|kind| {
        let vessel = Vessel::new(kind, m(2.0), m(3.0)).unwrap();
        if kind.requires_head_distance() {
            vessel.with_head_distance(m(0.8)).unwrap()
        } else {
            vessel
        }
    })
}

#[test]
fn empty_and_full_for_every_kind() {
    for vessel in catalog() {
        let kind = vessel.kind();
        let total = m3(vessel.total_volume());
        let height = vessel.total_height();

        assert_eq!(m3(vessel.liquid_volume(m(0.0))), 0.0, "{kind}");
        assert_eq!(vessel.wetted_area(m(-1.0)).get::<square_meter>(), 0.0, "{kind}");
        assert_relative_eq!(m3(vessel.liquid_volume(height)), total, max_relative = 1e-6);
        assert_relative_eq!(
            vessel.wetted_area(height).get::<square_meter>(),
            vessel.total_surface_area().get::<square_meter>(),
            max_relative = 1e-6
        );
        assert_eq!(
            m3(vessel.total_volume()),
            m3(vessel.shell_volume()) + m3(vessel.head_volume()),
            "{kind}"
        );
    }
}

#[test]
fn monotone_for_every_kind() {
    for vessel in catalog() {
        let height = vessel.total_height().get::<meter>();
        let mut last = (0.0, 0.0);
        for i in 0..=60 {
            let level = m(height * f64::from(i) / 60.0);
            let volume = m3(vessel.liquid_volume(level));
            let area = vessel.wetted_area(level).get::<square_meter>();
            assert!(volume >= last.0 - 1e-9, "{} volume drops at {i}", vessel.kind());
            assert!(area >= last.1 - 1e-9, "{} area drops at {i}", vessel.kind());
            last = (volume, area);
        }
    }
}

#[test]
fn levels_beyond_the_top_are_clamped() {
    for vessel in catalog() {
        let height = vessel.total_height();
        assert_eq!(
            vessel.liquid_volume(height * 3.0),
            vessel.liquid_volume(height),
            "{}",
            vessel.kind()
        );
    }
}

#[test]
fn vertical_flat_vessel() {
    let mut vessel = Vessel::vertical(HeadShape::Flat, Variant::Vessel, m(2.0), m(3.0)).unwrap();

    assert_relative_eq!(m3(vessel.shell_volume()), 3.0 * PI);
    assert_eq!(m3(vessel.head_volume()), 0.0);
    assert_eq!(vessel.total_volume(), vessel.shell_volume());
    assert_relative_eq!(m3(vessel.liquid_volume(m(1.5))), 1.5 * PI);

    vessel.set_high_liquid_level(m(2.0)).unwrap();
    vessel.set_low_liquid_level(m(1.0)).unwrap();
    assert_relative_eq!(m3(vessel.working_volume()), PI);

    let rate = VolumeRate::new::<cubic_meter_per_second>(1.0);
    assert_relative_eq!(vessel.surge_time(rate).unwrap().get::<second>(), PI);

    for bad in [0.0, -1.0] {
        let rate = VolumeRate::new::<cubic_meter_per_second>(bad);
        assert!(matches!(
            vessel.surge_time(rate),
            Err(VesselError::InvalidArgument {
                parameter: Parameter::FlowRate,
                ..
            })
        ));
    }
}

#[test]
fn rejected_writes_keep_prior_state() {
    let mut vessel = Vessel::vertical(HeadShape::Flat, Variant::Vessel, m(2.0), m(3.0)).unwrap();
    let before = vessel;

    for bad in [-1.0, 0.0] {
        assert!(matches!(
            vessel.set_diameter(m(bad)),
            Err(VesselError::Validation {
                parameter: Parameter::Diameter,
                ..
            })
        ));
        assert!(matches!(
            vessel.set_length(m(bad)),
            Err(VesselError::Validation {
                parameter: Parameter::Length,
                ..
            })
        ));
    }
    assert_eq!(
        vessel.set_liquid_level(m(-1.0)),
        Err(VesselError::Validation {
            parameter: Parameter::LiquidLevel,
            source: ConstraintError::Negative,
        })
    );

    assert_eq!(vessel, before);
    assert_eq!(vessel.diameter(), m(2.0));
    assert_eq!(vessel.length(), m(3.0));

    assert!(Vessel::vertical(HeadShape::Flat, Variant::Vessel, m(2.0), m(0.0)).is_err());
    assert!(Vessel::sphere(m(-4.0)).is_err());
}

#[test]
fn control_levels_stay_ordered() {
    let mut vessel = Vessel::vertical(HeadShape::Flat, Variant::Vessel, m(2.0), m(3.0)).unwrap();

    assert!(matches!(
        vessel.set_high_liquid_level(m(3.5)),
        Err(VesselError::Validation {
            source: ConstraintError::AboveMaximum,
            ..
        })
    ));
    assert!(matches!(
        vessel.set_low_liquid_level(m(0.5)),
        Err(VesselError::Validation {
            parameter: Parameter::LowLiquidLevel,
            ..
        })
    ));

    vessel.set_levels(m(0.5), m(2.5)).unwrap();
    assert!(matches!(
        vessel.set_high_liquid_level(m(0.2)),
        Err(VesselError::Validation {
            source: ConstraintError::BelowMinimum,
            ..
        })
    ));
    assert!(vessel.set_levels(m(2.6), m(2.5)).is_err());

    assert_eq!(vessel.low_liquid_level(), m(0.5));
    assert_eq!(vessel.high_liquid_level(), m(2.5));
}

#[test]
fn shape_parameters_only_where_they_apply() {
    let mut flat = Vessel::horizontal(HeadShape::Flat, m(2.0), m(3.0)).unwrap();
    assert!(matches!(
        flat.set_head_distance(m(0.5)),
        Err(VesselError::NotApplicable {
            parameter: Parameter::HeadDistance,
            ..
        })
    ));
    assert!(flat.set_head_factors(HeadFactors::TORISPHERICAL).is_err());
    assert_eq!(flat.head_factors(), None);
    assert_eq!(flat.tangency(), None);

    let mut sphere = Vessel::sphere(m(2.0)).unwrap();
    assert!(matches!(
        sphere.set_length(m(1.0)),
        Err(VesselError::NotApplicable {
            parameter: Parameter::Length,
            kind: VesselKind::Spherical,
        })
    ));
    assert_eq!(sphere.length(), m(0.0));

    let mut cone = Vessel::horizontal(HeadShape::Conical, m(2.0), m(3.0)).unwrap();
    assert!(cone.set_head_distance(m(-0.1)).is_err());
    cone.set_head_distance(m(0.6)).unwrap();
    assert_eq!(cone.head_distance(), m(0.6));
}

#[test]
fn spherical_tank() {
    let sphere = Vessel::sphere(m(4.0)).unwrap();

    assert_relative_eq!(m3(sphere.total_volume()), 33.510, epsilon = 1e-3);
    assert_eq!(sphere.liquid_volume(m(4.0)), sphere.total_volume());
    assert_eq!(sphere.total_height(), m(4.0));
    assert_eq!(m3(sphere.head_volume()), 0.0);
    assert_eq!(m3(sphere.tangent_volume()), 0.0);
}

#[test]
fn torispherical_bottom_head() {
    let vessel =
        Vessel::vertical(HeadShape::Torispherical, Variant::Vessel, m(2.0), m(3.0)).unwrap();
    let depth = vessel.head_distance();

    let bottom = m3(vessel.bottom_head_liquid_volume(depth));
    assert_relative_eq!(bottom, 0.5 * m3(vessel.head_volume()), max_relative = 1e-9);
    assert_relative_eq!(bottom / 8.0, 0.0810, epsilon = 1e-4);

    assert_eq!(m3(vessel.bottom_head_liquid_volume(m(0.0))), 0.0);
    assert_eq!(m3(vessel.bottom_head_liquid_volume(m(-0.3))), 0.0);
    assert_eq!(m3(vessel.top_head_liquid_volume(vessel.tangent_height())), 0.0);

    let tangency = vessel.tangency().unwrap();
    assert_relative_eq!(tangency.a2 * 2.0, depth.get::<meter>());
}

#[test]
fn custom_head_factors() {
    let standard =
        Vessel::vertical(HeadShape::Torispherical, Variant::Vessel, m(2.0), m(3.0)).unwrap();
    let deeper = standard
        .with_head_factors(HeadFactors::new(0.8, 0.1).unwrap())
        .unwrap();

    assert!(deeper.head_distance() > standard.head_distance());
    assert!(deeper.head_volume() > standard.head_volume());
    assert_eq!(deeper.head_factors().map(|f| f.fk()), Some(0.1));
}

#[test]
fn tanks_have_a_flat_bottom() {
    for vessel in catalog().filter(|v| v.kind().variant() == Variant::Tank) {
        let kind = vessel.kind();
        assert_eq!(vessel.bottom_head_distance(), m(0.0), "{kind}");
        for level in [0.0, 0.2, 1.0, 3.0, 9.0] {
            assert_eq!(m3(vessel.bottom_head_liquid_volume(m(level))), 0.0, "{kind}");
        }
    }
}

#[test]
fn effective_volume_reference_differs_by_orientation() {
    let mut vertical =
        Vessel::vertical(HeadShape::Hemispherical, Variant::Vessel, m(2.0), m(3.0)).unwrap();
    vertical.set_high_liquid_level(m(2.0)).unwrap();
    assert_relative_eq!(
        m3(vertical.effective_volume()),
        m3(vertical.liquid_volume(m(3.0))),
        epsilon = 1e-12
    );

    let mut horizontal = Vessel::horizontal(HeadShape::Hemispherical, m(2.0), m(3.0)).unwrap();
    horizontal.set_high_liquid_level(m(1.5)).unwrap();
    assert_relative_eq!(
        m3(horizontal.effective_volume()),
        m3(horizontal.liquid_volume(m(1.5))),
        epsilon = 1e-12
    );
}

#[test]
fn horizontal_heads_hold_as_much_as_vertical_ones() {
    for head in [HeadShape::Torispherical, HeadShape::Elliptical] {
        let vertical = Vessel::vertical(head, Variant::Vessel, m(2.0), m(3.0)).unwrap();
        let horizontal = Vessel::horizontal(head, m(2.0), m(3.0)).unwrap();

        assert_relative_eq!(
            m3(horizontal.head_volume()),
            m3(vertical.head_volume()),
            max_relative = 1e-6
        );
        assert_relative_eq!(
            horizontal.head_surface_area().get::<square_meter>(),
            vertical.head_surface_area().get::<square_meter>(),
            max_relative = 1e-6
        );
    }
}

#[test]
fn horizontal_cone_is_continuous_at_the_axis() {
    let vessel = Vessel::horizontal(HeadShape::Conical, m(2.0), m(3.0))
        .unwrap()
        .with_head_distance(m(0.8))
        .unwrap();

    let below = m(1.0 - 1e-9);
    let at = m(1.0);
    assert_relative_eq!(
        m3(vessel.head_liquid_volume(below)),
        m3(vessel.head_liquid_volume(at)),
        epsilon = 1e-7
    );
    assert_relative_eq!(
        vessel.head_wetted_area(below).get::<square_meter>(),
        vessel.head_wetted_area(at).get::<square_meter>(),
        epsilon = 1e-7
    );
}

#[test]
fn overflow_allowance() {
    let mut vessel = Vessel::sphere(m(2.0)).unwrap();
    assert_eq!(m3(vessel.overflow_volume()), 0.0);

    vessel.set_overflow(true);
    assert_relative_eq!(
        m3(vessel.overflow_volume()),
        0.02 * m3(vessel.total_volume())
    );
}
