//! Color map (LUT) system for flat band colors.
//!
//! A [`ColorMap`] is a named list of color stops sampled either continuously
//! or quantized into a fixed number of flat bins. The band mesher always goes
//! through [`ColorMap::color_at`], a pure lookup over a `[min, max]` window:
//! values outside the window miss the table and return `None`, which callers
//! resolve to a default color.

use std::collections::HashMap;

use glam::Vec3;

/// Number of flat bins a lookup table is quantized into.
pub const LUT_BINS: u32 = 64;

/// A color map for mapping scalar values to colors.
#[derive(Debug, Clone)]
pub struct ColorMap {
    /// Color map name.
    pub name: String,
    /// Color samples (evenly spaced from 0 to 1).
    pub colors: Vec<Vec3>,
}

impl ColorMap {
    /// Creates a new color map.
    pub fn new(name: impl Into<String>, colors: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Samples the color map at a given value (0 to 1).
    #[must_use]
    pub fn sample(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);

        if self.colors.is_empty() {
            return Vec3::ZERO;
        }

        if self.colors.len() == 1 {
            return self.colors[0];
        }

        let n = self.colors.len() - 1;
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let idx = ((t * n as f32).floor() as usize).min(n - 1);
        #[allow(clippy::cast_precision_loss)]
        let frac = t * n as f32 - idx as f32;

        self.colors[idx].lerp(self.colors[idx + 1], frac)
    }

    /// Samples the color map quantized into `bins` flat steps.
    ///
    /// All values falling into the same bin get the color at the bin center,
    /// so neighboring bands render as visually distinct flat regions.
    #[must_use]
    pub fn sample_banded(&self, t: f32, bins: u32) -> Vec3 {
        if bins == 0 {
            return self.sample(t);
        }
        let t = t.clamp(0.0, 1.0);
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let idx = ((t * bins as f32).floor() as u32).min(bins - 1);
        #[allow(clippy::cast_precision_loss)]
        self.sample((idx as f32 + 0.5) / bins as f32)
    }

    /// Pure lookup of the color for `value` over the `[min, max]` window.
    ///
    /// Returns `None` when `value` lies outside the window or the window is
    /// empty; `reversed` flips the map direction. The result is quantized to
    /// [`LUT_BINS`] flat steps.
    #[must_use]
    pub fn color_at(&self, value: f64, min: f64, max: f64, reversed: bool) -> Option<Vec3> {
        let span = max - min;
        if !(span > 0.0) || value < min || value > max {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let mut t = ((value - min) / span) as f32;
        if reversed {
            t = 1.0 - t;
        }
        Some(self.sample_banded(t, LUT_BINS))
    }
}

/// Registry for managing color maps.
#[derive(Default)]
pub struct ColorMapRegistry {
    color_maps: HashMap<String, ColorMap>,
}

impl ColorMapRegistry {
    /// Creates a new color map registry with default color maps.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        // Viridis color map
        self.register(ColorMap::new(
            "viridis",
            vec![
                Vec3::new(0.267, 0.004, 0.329),
                Vec3::new(0.282, 0.140, 0.457),
                Vec3::new(0.253, 0.265, 0.529),
                Vec3::new(0.206, 0.371, 0.553),
                Vec3::new(0.163, 0.471, 0.558),
                Vec3::new(0.127, 0.566, 0.550),
                Vec3::new(0.134, 0.658, 0.517),
                Vec3::new(0.266, 0.749, 0.440),
                Vec3::new(0.477, 0.821, 0.318),
                Vec3::new(0.741, 0.873, 0.150),
                Vec3::new(0.993, 0.906, 0.144),
            ],
        ));

        // Rainbow color map
        self.register(ColorMap::new(
            "rainbow",
            vec![
                Vec3::new(0.5, 0.0, 1.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 1.0, 1.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
            ],
        ));

        // Cool-to-warm color map
        self.register(ColorMap::new(
            "cooltowarm",
            vec![
                Vec3::new(0.230, 0.299, 0.754),
                Vec3::new(0.552, 0.690, 0.996),
                Vec3::new(0.866, 0.866, 0.866),
                Vec3::new(0.956, 0.604, 0.486),
                Vec3::new(0.706, 0.016, 0.150),
            ],
        ));

        // Grayscale color map
        self.register(ColorMap::new(
            "grayscale",
            vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0)],
        ));

        // Blackbody radiation color map
        self.register(ColorMap::new(
            "blackbody",
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.70, 0.08, 0.01),
                Vec3::new(0.94, 0.46, 0.05),
                Vec3::new(1.0, 0.82, 0.24),
                Vec3::new(1.0, 1.0, 1.0),
            ],
        ));

        // Cyclic interferogram-style fringe map
        self.register(ColorMap::new(
            "insar",
            vec![
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 1.0, 1.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 1.0),
            ],
        ));

        // Diverging blue-white-red color map
        self.register(ColorMap::new(
            "blue-white-red",
            vec![
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(1.0, 0.0, 0.0),
            ],
        ));

        // Discrete banded color map
        self.register(ColorMap::new(
            "banded",
            vec![
                Vec3::new(0.122, 0.467, 0.706),
                Vec3::new(1.000, 0.498, 0.055),
                Vec3::new(0.173, 0.627, 0.173),
                Vec3::new(0.839, 0.153, 0.157),
                Vec3::new(0.580, 0.404, 0.741),
                Vec3::new(0.549, 0.337, 0.294),
            ],
        ));
    }

    /// Registers a color map.
    pub fn register(&mut self, color_map: ColorMap) {
        self.color_maps.insert(color_map.name.clone(), color_map);
    }

    /// Gets a color map by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColorMap> {
        self.color_maps.get(name)
    }

    /// Returns all color map names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.color_maps.keys().map(String::as_str)
    }
}
