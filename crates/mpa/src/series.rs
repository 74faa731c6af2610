//! Fundamental arguments and the eccentricity-damped harmonic summation over a term table.

use eclipse_core::angles::{deg2rad, limit_degrees};
use eclipse_core::polynomial::{fourth_order, third_order};
use serde::Serialize;

use crate::terms::PeriodicTerm;

/// Mean lunar and solar angles for one instant (degrees, each in [0, 360)).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FundamentalArguments {
    /// Moon mean longitude L′.
    pub l_prime: f64,
    /// Moon mean elongation D.
    pub d: f64,
    /// Sun mean anomaly M.
    pub m: f64,
    /// Moon mean anomaly M′.
    pub m_prime: f64,
    /// Moon argument of latitude F.
    pub f: f64,
}

impl FundamentalArguments {
    pub fn at(jce: f64) -> Self {
        Self {
            l_prime: limit_degrees(fourth_order(
                -1.0 / 65_194_000.0,
                1.0 / 538_841.0,
                -0.0015786,
                481_267.88123421,
                218.3164477,
                jce,
            )),
            d: limit_degrees(fourth_order(
                -1.0 / 113_065_000.0,
                1.0 / 545_868.0,
                -0.0018819,
                445_267.1114034,
                297.8501921,
                jce,
            )),
            m: limit_degrees(third_order(
                1.0 / 24_490_000.0,
                -0.0001536,
                35_999.0502909,
                357.5291092,
                jce,
            )),
            m_prime: limit_degrees(fourth_order(
                -1.0 / 14_712_000.0,
                1.0 / 69_699.0,
                0.0087414,
                477_198.8675055,
                134.9633964,
                jce,
            )),
            f: limit_degrees(fourth_order(
                1.0 / 863_310_000.0,
                -1.0 / 3_526_000.0,
                -0.0036539,
                483_202.0175233,
                93.2720950,
                jce,
            )),
        }
    }
}

/// Sine- and cosine-weighted totals of one term table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HarmonicSum {
    pub sin_sum: f64,
    pub cos_sum: f64,
}

/// Eccentricity of the Earth's orbit relative to J2000, damping terms that involve M.
#[inline]
pub fn eccentricity_factor(jce: f64) -> f64 {
    1.0 - jce * (0.002516 + jce * 0.0000074)
}

/// Sum a term table at the given arguments; each row is weighted by `E^|m|`.
pub fn sum_periodic_terms(
    args: &FundamentalArguments,
    jce: f64,
    terms: &[PeriodicTerm],
) -> HarmonicSum {
    let e = eccentricity_factor(jce);

    terms.iter().fold(HarmonicSum::default(), |acc, term| {
        let e_mult = e.powi(i32::from(term.m.abs()));
        let trig_arg = deg2rad(
            f64::from(term.d) * args.d
                + f64::from(term.m) * args.m
                + f64::from(term.f) * args.f
                + f64::from(term.m_prime) * args.m_prime,
        );
        HarmonicSum {
            sin_sum: acc.sin_sum + e_mult * term.sin_coeff * trig_arg.sin(),
            cos_sum: acc.cos_sum + e_mult * term.cos_coeff * trig_arg.cos(),
        }
    })
}

