//! Convergence Animator: eases displayed positions toward desired ones.
//!
//! Each tick closes the fraction `rate` of the remaining distance on both axes. Geometric
//! decay never reaches the target exactly, so a node whose remaining distance is below
//! `epsilon` on both axes is snapped onto it.

use crate::config::{validate_epsilon, validate_rate};
use crate::error::Result;
use crate::graph::Graph;
use crate::model::Point;

/// Advances every unpinned node by one tick and returns the recomputed settled flag.
///
/// A settled graph is left untouched.
#[tracing::instrument(level = "trace", skip(graph))]
pub fn step(graph: &mut Graph, rate: f64, epsilon: f64) -> Result<bool> {
    validate_rate(rate)?;
    validate_epsilon(epsilon)?;

    let mut moving: usize = 0;
    for node in graph.nodes.values_mut() {
        if node.pinned {
            continue;
        }
        let (Some(displayed), Some(desired)) = (node.displayed, node.desired) else {
            continue;
        };
        if displayed == desired {
            continue;
        }
        let next = advance(displayed, desired, rate, epsilon);
        if next != desired {
            moving += 1;
        }
        node.displayed = Some(next);
    }

    let settled = graph.refresh_settled();
    tracing::trace!(moving, settled, "tick");
    Ok(settled)
}

fn advance(displayed: Point, desired: Point, rate: f64, epsilon: f64) -> Point {
    if (desired.x - displayed.x).abs() < epsilon && (desired.y - displayed.y).abs() < epsilon {
        return desired;
    }
    let next = displayed.lerp(desired, rate);
    if !next.x.is_finite() || !next.y.is_finite() {
        return desired;
    }
    // Rounding can stall a tiny step; never let a node stop short of its target.
    if next.distance(desired) >= displayed.distance(desired) {
        return desired;
    }
    next
}

/// Upper bound on the ticks a node `distance` away from its target needs to settle.
///
/// After `k` ticks the remaining distance is `distance * (1 - rate)^k`; the node snaps once
/// that drops below `epsilon`, which it does after at most this many ticks (one more for the
/// snap itself).
pub fn ticks_to_settle(distance: f64, rate: f64, epsilon: f64) -> Result<u64> {
    validate_rate(rate)?;
    validate_epsilon(epsilon)?;

    if distance.is_nan() || distance <= 0.0 {
        return Ok(0);
    }
    if rate >= 1.0 || distance < epsilon {
        return Ok(1);
    }
    let decay = (1.0 - rate).ln();
    let ticks = ((epsilon / distance).ln() / decay).ceil().max(0.0);
    Ok(ticks as u64 + 1)
}
