pub struct DefaultsConfig {
    pub start: usize,
    pub stop: Option<usize>,
    pub stride: usize,
    pub colormap: String,
    pub alpha: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            start: 0,
            stop: None,
            stride: 1,
            colormap: "viridis".to_string(),
            alpha: 1.0,
        }
    }
}
