//! Test fixtures and constants.

/// Paint ids from the embedded catalog
pub mod paints {
    pub const TITANIUM_WHITE: &str = "wn-titanium-white";
    pub const CADMIUM_YELLOW: &str = "wn-cadmium-yellow";
    pub const CADMIUM_RED: &str = "wn-cadmium-red";
    pub const FRENCH_ULTRAMARINE: &str = "wn-french-ultramarine";
    pub const COBALT_BLUE_HUE: &str = "lq-cobalt-blue-hue";
}

/// Brand ids from the embedded catalog
pub mod brands {
    pub const WINSOR_NEWTON: &str = "winsor-newton";
    pub const LIQUITEX: &str = "liquitex";
    pub const GOLDEN: &str = "golden";
    pub const DALER_ROWNEY: &str = "daler-rowney";
}

/// Target colors
pub mod targets {
    /// Exactly Winsor & Newton Cadmium Red
    pub const CADMIUM_RED: &str = "#e30022";
    /// Mid blue, far from anything white alone can reach
    pub const STEEL_BLUE: &str = "#3a6ea5";
    /// Exactly Liquitex Cobalt Blue Hue
    pub const COBALT_BLUE_HUE: &str = "#1f4e9c";
    /// Olive green reachable from yellow and blue
    pub const OLIVE: &str = "#8daf69";
}
