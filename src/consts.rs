pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Display limits and sizes shared by the dashboard views.

    // =============================================================================
    // ACTIVITY LOG
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // TABLE RENDERING
    // =============================================================================

    /// Placeholder shown instead of a password until the row is revealed.
    pub const PASSWORD_MASK: &str = "••••••••";

    /// Number of URL characters shown in the links table before truncating.
    pub const URL_DISPLAY_WIDTH: usize = 30;

    // =============================================================================
    // LOGIN
    // =============================================================================

    /// Upper bound on the length of one base-36 fragment of a secret key.
    pub const SECRET_KEY_FRAGMENT_LEN: usize = 13;

    // =============================================================================
    // UI LOOP
    // =============================================================================

    /// Redraw interval for the UI loop
    pub mod ui_loop {
        use std::time::Duration;

        /// Interval between redraws when no key is pressed (milliseconds)
        pub const TICK_MS: u64 = 250;

        /// Helper function to get the redraw interval
        pub const fn tick() -> Duration {
            Duration::from_millis(TICK_MS)
        }
    }
}
