use crate::probe::{GridProbes, ProbeGrid};

use radiance_cascades_core::{ray_angle, unit_vector, Point2d, RadialInterval};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single cast ray: one angular sample of one probe's radial interval.
///
/// A ray does not start at its probe. It samples only the annular band its level owns, so its
/// geometry runs from `probe + direction * interval.inner` to `probe + direction *
/// interval.outer`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Ray {
    /// The world-space center of the probe casting this ray.
    pub probe: Point2d,
    /// The index of this ray within its probe's fan.
    pub ray_index: u32,
    /// The unit direction this ray points in.
    pub direction: Point2d,
    /// The radial interval this ray samples.
    pub interval: RadialInterval,
}

impl Ray {
    /// The world-space point where the sampled interval begins.
    #[inline]
    pub fn start(&self) -> Point2d {
        self.probe + self.direction * self.interval.inner
    }

    /// The world-space point where the sampled interval ends.
    #[inline]
    pub fn end(&self) -> Point2d {
        self.probe + self.direction * self.interval.outer
    }
}

/// An iterator over the fan of rays cast by a single probe, in ascending index order.
#[derive(Clone)]
pub struct ProbeRays {
    center: Point2d,
    ray_count: u32,
    interval: RadialInterval,
    next_ray: u32,
}

impl ProbeRays {
    pub(crate) fn new(center: Point2d, ray_count: u32, interval: RadialInterval) -> Self {
        Self {
            center,
            ray_count,
            interval,
            next_ray: 0,
        }
    }
}

impl Iterator for ProbeRays {
    type Item = Ray;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next_ray >= self.ray_count {
            return None;
        }
        let ray_index = self.next_ray;
        self.next_ray += 1;

        Some(Ray {
            probe: self.center,
            ray_index,
            direction: unit_vector(ray_angle(ray_index, self.ray_count)),
            interval: self.interval,
        })
    }
}

/// An iterator over every ray one cascade level casts.
///
/// Probes are visited in row-major grid order and each probe's fan in ascending ray index, so
/// two iterations over the same level always yield identical rays in identical order. The
/// iterator is lazy; dropping it early does no wasted work.
#[derive(Clone)]
pub struct LevelRays {
    probes: GridProbes,
    ray_count: u32,
    interval: RadialInterval,
    current_fan: Option<ProbeRays>,
}

impl LevelRays {
    pub(crate) fn new(grid: ProbeGrid, ray_count: u32, interval: RadialInterval) -> Self {
        Self {
            probes: grid.probes(),
            ray_count,
            interval,
            current_fan: None,
        }
    }
}

impl Iterator for LevelRays {
    type Item = Ray;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(fan) = self.current_fan.as_mut() {
                if let Some(ray) = fan.next() {
                    return Some(ray);
                }
            }

            let probe = self.probes.next()?;
            self.current_fan = Some(ProbeRays::new(probe.center, self.ray_count, self.interval));
        }
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
