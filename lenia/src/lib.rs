// lib.rs - Continuous-field automaton for the heatmap view

//! A Lenia-style continuous automaton. Every cell holds a value in `[0, 1]`;
//! each step convolves the field with a ring kernel, passes the result through
//! a growth function and integrates it with a small time step.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use grid_display::{EngineError, GridError, Pattern, SimulationEngine, StateView};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

pub mod kernel;
pub mod matrix;

use kernel::{convolve_at, gaussian_kernel, normal_gauss};
use matrix::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeniaParams {
    /// Kernel radius in cells.
    pub radius: usize,
    /// Steps per unit of time; the integration step is its inverse.
    pub time_constant: f64,
    pub growth_center: f64,
    pub growth_width: f64,
    pub kernel_peak: f64,
    pub kernel_width: f64,
    pub seed: u64,
}

impl Default for LeniaParams {
    fn default() -> Self {
        Self {
            radius: 10,
            time_constant: 10.0,
            growth_center: 0.15,
            growth_width: 0.015,
            kernel_peak: 0.5,
            kernel_width: 0.15,
            seed: 0,
        }
    }
}

pub struct Lenia {
    params: LeniaParams,
    field: Matrix<f64>,
    kernel: Matrix<f64>,
    version: u64,
}

impl Lenia {
    /// An empty field.
    pub fn new(width: u32, height: u32, params: LeniaParams) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroExtent { width, height });
        }
        let radius = params.radius.max(1);
        Ok(Self {
            params,
            field: Matrix::from_constant(width as usize, height as usize, 0.0),
            kernel: gaussian_kernel(radius, params.kernel_peak, params.kernel_width),
            version: 0,
        })
    }

    pub fn field(&self) -> &Matrix<f64> {
        &self.field
    }

    /// Total mass of the field.
    pub fn mass(&self) -> f64 {
        self.field.iter().sum()
    }

    /// Maps the convolution potential to a rate of change in `[-1, 1]`.
    pub fn growth(&self, potential: f64) -> f64 {
        2.0 * normal_gauss(potential, self.params.growth_center, self.params.growth_width) - 1.0
    }

    /// Fills a centred square patch with pseudo-random values.
    fn seed_patch(&mut self) {
        let mut hasher = DefaultHasher::new();
        self.params.seed.hash(&mut hasher);
        let mut state = hasher.finish();

        let width = self.field.width();
        let height = self.field.height();
        let side = (self.params.radius * 2).min(width).min(height);
        let left = (width - side) / 2;
        let top = (height - side) / 2;

        for y in top..top + side {
            for x in left..left + side {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let value = (state >> 11) as f64 / (1u64 << 53) as f64;
                self.field.set(x, y, value);
            }
        }
    }
}

impl SimulationEngine for Lenia {
    fn dimensions(&self) -> (u32, u32) {
        (self.field.width() as u32, self.field.height() as u32)
    }

    /// Continuous fields have no plaintext layout: any pattern is ignored and
    /// a random patch is seeded instead.
    fn init(&mut self, pattern: Option<&Pattern<'_>>) -> Result<(), EngineError> {
        if let Some(pattern) = pattern {
            debug!("lenia ignores pattern `{}`", pattern.name);
        }
        self.field.map(|_| 0.0);
        self.seed_patch();
        self.version += 1;
        Ok(())
    }

    fn tick(&mut self) {
        let dt = 1.0 / self.params.time_constant;
        let field = &self.field;
        let kernel = &self.kernel;
        let next = Matrix::from_function(field.width(), field.height(), |x, y| {
            let potential = convolve_at(field, kernel, x, y);
            (field.get(x, y) + dt * self.growth(potential)).clamp(0.0, 1.0)
        });
        self.field = next;
        self.version += 1;
        trace!("lenia step {}, mass {:.3}", self.version, self.mass());
    }

    fn state(&self) -> StateView<'_> {
        StateView::continuous(self.version, self.field.as_slice())
    }
}
