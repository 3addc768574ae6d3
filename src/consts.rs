pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Defaults for the ring geometry, animation timings and layout rules,
    //! organized by functional area. Animation timings can be overridden
    //! through the configuration file.

    // =============================================================================
    // RING GEOMETRY
    // =============================================================================

    /// Progress ring geometry defaults (abstract drawing units)
    pub mod ring {
        /// Outer diameter of the ring when the caller does not supply one.
        pub const DEFAULT_DIAMETER: f64 = 120.0;

        /// Stroke width of both the track and the arc.
        pub const DEFAULT_STROKE_WIDTH: f64 = 8.0;

        /// Terminal rows used to draw the ring. Columns are twice this so the
        /// braille canvas stays square.
        pub const CANVAS_ROWS: u16 = 9;
    }

    // =============================================================================
    // ANIMATION CONFIGURATION
    // =============================================================================

    /// Animation timing defaults (milliseconds)
    pub mod animation {
        /// Ring dash offset transition, fully hidden to target.
        pub const RING_MS: u64 = 1000;

        /// Risk bar width transition, 0 to the stored percent.
        pub const BAR_MS: u64 = 1000;

        /// Card and row entrance (fade + slide).
        pub const ENTRANCE_MS: u64 = 400;

        /// Delay between consecutive list rows and impact tiles.
        pub const STAGGER_MS: u64 = 100;

        /// Colour fade after a theme toggle.
        pub const THEME_FADE_MS: u64 = 300;

        /// Rows a card travels while sliding in.
        pub const CARD_SLIDE_ROWS: u16 = 1;

        /// Columns a priority row travels while sliding in from the left.
        pub const ROW_SLIDE_COLS: u16 = 2;

        /// Starting scale of business impact tiles.
        pub const TILE_START_SCALE: f64 = 0.9;
    }

    // =============================================================================
    // LAYOUT CONFIGURATION
    // =============================================================================

    /// Static layout rules
    pub mod layout {
        /// Terminal width at which the grid switches to two columns.
        pub const MEDIUM_MIN_WIDTH: u16 = 80;

        /// Terminal width at which the grid switches to three columns.
        pub const WIDE_MIN_WIDTH: u16 = 120;

        /// Width of the theme toggle badge in the top-right corner.
        pub const TOGGLE_WIDTH: u16 = 10;
    }

    /// Interval between redraws of the interactive dashboard (milliseconds).
    pub const TICK_RATE_MS: u64 = 50;

    /// Name of the directory holding the optional configuration file.
    pub const CONFIG_DIR: &str = ".security-dashboard";

    /// Name of the optional configuration file.
    pub const CONFIG_FILE: &str = "config.json";
}
