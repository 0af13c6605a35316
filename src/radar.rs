//! Radar-chart projection of a stat record.
//!
//! Six axes in fixed order (HP, Attack, Defense, Sp. Atk, Sp. Def, Speed),
//! first axis pointing up, radius proportional to the stat over its 255
//! ceiling. Pure function: same stats, same polygon.

use crate::model::{BaseStats, STAT_MAX};
use std::f32::consts::{FRAC_PI_2, TAU};

pub const AXES: usize = 6;
pub const CHART_RADIUS: f32 = 80.0;
pub const CHART_CENTER: (f32, f32) = (100.0, 100.0);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Map a stat record onto the six polygon vertices.
pub fn project(stats: &BaseStats) -> [Point; AXES] {
    let values = stats.as_array();
    let mut points = [Point::default(); AXES];
    for (i, value) in values.iter().enumerate() {
        let r = (f32::from(*value) / f32::from(STAT_MAX)) * CHART_RADIUS;
        let angle = i as f32 * (TAU / AXES as f32) - FRAC_PI_2;
        points[i] = Point {
            x: CHART_CENTER.0 + r * angle.cos(),
            y: CHART_CENTER.1 + r * angle.sin(),
        };
    }
    points
}
