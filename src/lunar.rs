//! Approximate geocentric moon position from propagated orbital elements.
//!
//! Distances are in Earth radii, angles in radians. Higher
//! [`MoonAccuracy`] levels refine the same orbit solution; perturbations are
//! corrections on top of it, never a replacement.

use crate::angles::{deg_to_rad, horizontal_position};
use crate::solar;
use crate::time_base::{days_since_j2000, DAYS_PER_CENTURY};
use crate::types::{EquatorialPosition, HorizontalPosition, Location, MoonAccuracy};

/// Days added before converting to centuries; the element epochs below are
/// offset by this much and the shift realigns them.
const ELEMENT_EPOCH_SHIFT_DAYS: f64 = 1.5;

const ASCENDING_NODE: (f64, f64) = (2.183805, -33.7570736);
const INCLINATION: f64 = 0.089804;
const PERIGEE_ARGUMENT: (f64, f64) = (5.551254, 104.7747539);
const SEMI_MAJOR_AXIS: f64 = 60.2666;
const ECCENTRICITY: f64 = 0.054900;
const MEAN_ANOMALY: (f64, f64) = (2.013506, 8328.69142630);

/// Sun's mean anomaly on the same shifted epoch.
const SUN_MEAN_ANOMALY: (f64, f64) = (4.468863, 628.3019404);

const KEPLER_MAX_STEPS: usize = 9;
const KEPLER_TOLERANCE: f64 = 1e-6;

/// (amplitude, multiples of M, F, D, Ms); each term adds amplitude·sin(argument).
type Term = (f64, f64, f64, f64, f64);

const LATITUDE_PRIMARY: [Term; 1] = [(-0.003019, 0.0, 1.0, -2.0, 0.0)];

const LATITUDE_SECONDARY: [Term; 4] = [
    (-0.00096, 1.0, -1.0, -2.0, 0.0),
    (-0.00080, 1.0, 1.0, -2.0, 0.0),
    (0.00058, 0.0, 1.0, 2.0, 0.0),
    (0.00030, 2.0, 1.0, 0.0, 0.0),
];

/// Evection, variation and annual equation.
const LONGITUDE_PRIMARY: [Term; 3] = [
    (-0.02224, 1.0, 0.0, -2.0, 0.0),
    (0.0115, 0.0, 0.0, 2.0, 0.0),
    (-0.00325, 0.0, 0.0, 0.0, 1.0),
];

const LONGITUDE_SECONDARY: [Term; 9] = [
    (-0.0010, 2.0, 0.0, -2.0, 0.0),
    (-0.00099, 1.0, 0.0, -2.0, 1.0),
    (0.00093, 1.0, 0.0, 2.0, 0.0),
    (0.00080, 0.0, 0.0, 2.0, -1.0),
    (0.00072, 1.0, 0.0, 0.0, -1.0),
    (-0.00061, 0.0, 0.0, 1.0, 0.0),
    (-0.00054, 1.0, 0.0, 0.0, 1.0),
    (-0.00026, 0.0, 2.0, -2.0, 0.0),
    (0.00019, 1.0, 0.0, -4.0, 0.0),
];

#[derive(Debug, Clone, Copy)]
struct Arguments {
    m: f64,
    f: f64,
    d: f64,
    ms: f64,
}

fn sum_terms(terms: &[Term], args: &Arguments) -> f64 {
    terms
        .iter()
        .map(|&(amp, m, f, d, ms)| amp * (m * args.m + f * args.f + d * args.d + ms * args.ms).sin())
        .sum()
}

/// Eccentric anomaly, first-order for level 0 and Newton-refined above.
fn eccentric_anomaly(mean_anomaly: f64, accuracy: MoonAccuracy) -> f64 {
    let e = ECCENTRICITY;
    let mut ecc = mean_anomaly + e * mean_anomaly.sin() * (1.0 + e * mean_anomaly.cos());
    if accuracy == MoonAccuracy::MeanAnomaly {
        return ecc;
    }
    for _ in 0..KEPLER_MAX_STEPS {
        let delta = (ecc - e * ecc.sin() - mean_anomaly) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() <= KEPLER_TOLERANCE {
            break;
        }
    }
    ecc
}

/// Geocentric ecliptic rectangular coordinates and the centuries value used.
fn ecliptic_rectangular(instant: f64, accuracy: MoonAccuracy) -> ([f64; 3], f64) {
    let t = (days_since_j2000(instant) + ELEMENT_EPOCH_SHIFT_DAYS) / DAYS_PER_CENTURY;

    let node = ASCENDING_NODE.0 + ASCENDING_NODE.1 * t;
    let perigee = PERIGEE_ARGUMENT.0 + PERIGEE_ARGUMENT.1 * t;
    let m = MEAN_ANOMALY.0 + MEAN_ANOMALY.1 * t;
    let e = ECCENTRICITY;

    let ecc = eccentric_anomaly(m, accuracy);
    let xv = SEMI_MAJOR_AXIS * (ecc.cos() - e);
    let yv = SEMI_MAJOR_AXIS * (1.0 - e * e).sqrt() * ecc.sin();
    let true_anomaly = yv.atan2(xv);
    let mut distance = xv.hypot(yv);

    let u = true_anomaly + perigee;
    let mut xyz = [
        distance * (node.cos() * u.cos() - node.sin() * u.sin() * INCLINATION.cos()),
        distance * (node.sin() * u.cos() + node.cos() * u.sin() * INCLINATION.cos()),
        distance * u.sin() * INCLINATION.sin(),
    ];

    if accuracy >= MoonAccuracy::Perturbed {
        let mut lat = xyz[2].atan2(xyz[0].hypot(xyz[1]));
        let mut lon = xyz[1].atan2(xyz[0]);

        let moon_longitude = node + perigee + m;
        let args = Arguments {
            m,
            f: moon_longitude - node,
            d: moon_longitude - solar::true_longitude(t),
            ms: SUN_MEAN_ANOMALY.0 + SUN_MEAN_ANOMALY.1 * t,
        };

        lat += sum_terms(&LATITUDE_PRIMARY, &args);
        lon += sum_terms(&LONGITUDE_PRIMARY, &args);
        if accuracy == MoonAccuracy::Full {
            lat += sum_terms(&LATITUDE_SECONDARY, &args);
            lon += sum_terms(&LONGITUDE_SECONDARY, &args);
        }
        distance -= 0.58 * (args.m - 2.0 * args.d).cos() + 0.46 * (2.0 * args.d).cos();

        xyz = [
            distance * lon.cos() * lat.cos(),
            distance * lon.sin() * lat.cos(),
            distance * lat.sin(),
        ];
    }

    (xyz, t)
}

/// Geocentric right ascension and declination.
pub fn moon_equatorial(instant: f64, accuracy: MoonAccuracy) -> EquatorialPosition {
    let ([xg, yg, zg], t) = ecliptic_rectangular(instant, accuracy);
    let ecl = solar::obliquity(t);

    let xe = xg;
    let ye = yg * ecl.cos() - zg * ecl.sin();
    let ze = yg * ecl.sin() + zg * ecl.cos();

    EquatorialPosition {
        right_ascension: ye.atan2(xe),
        declination: ze.atan2(xe.hypot(ye)),
    }
}

pub fn moon_position(instant: f64, location: &Location, accuracy: MoonAccuracy) -> HorizontalPosition {
    let eq = moon_equatorial(instant, accuracy);
    let ha = solar::hour_angle(instant, location.longitude(), eq.right_ascension);
    horizontal_position(ha, eq.declination, deg_to_rad(location.latitude()))
}

pub fn moon_azimuth(instant: f64, location: &Location, accuracy: MoonAccuracy) -> f64 {
    moon_position(instant, location, accuracy).azimuth
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_refinement_solves_equation() {
        let m = 1.234;
        let ecc = eccentric_anomaly(m, MoonAccuracy::Kepler);
        let residual = ecc - ECCENTRICITY * ecc.sin() - m;
        assert!(residual.abs() < 1e-9, "residual={residual}");
    }

    #[test]
    fn first_order_anomaly_is_close_to_refined() {
        let m = 2.5;
        let coarse = eccentric_anomaly(m, MoonAccuracy::MeanAnomaly);
        let fine = eccentric_anomaly(m, MoonAccuracy::Kepler);
        assert!((coarse - fine).abs() < 1e-3);
    }
}
