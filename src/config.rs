use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Parameters for one render, with the classic defaults: a 512x512 grid
/// over [-2, 2] x [-2, 2], 256 iterations, divergence threshold 2.5.
///
/// Every key is optional in the file, so a config can override just the
/// fields it cares about.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub real_low: f64,
    pub real_high: f64,
    pub imag_low: f64,
    pub imag_high: f64,
    pub max_iters: u32,
    pub upper_bound: f64,
    /// Where the PNG lands.
    pub output: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 512,
            height: 512,
            real_low: -2.0,
            real_high: 2.0,
            imag_low: -2.0,
            imag_high: 2.0,
            max_iters: 256,
            upper_bound: 2.5,
            output: "mandelbrot.png".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
