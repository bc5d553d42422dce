//! Game configuration options.

/// Configuration options for a Klondike game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use klondike::GameOptions;
///
/// let options = GameOptions::default()
///     .with_shuffle_on_recycle(false)
///     .with_max_recycles(Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Whether the spent pile is reshuffled when it becomes the draw pile.
    /// When `false` it is turned over in the order it was spent.
    pub shuffle_on_recycle: bool,
    /// How many times the spent pile may be recycled. `None` for no limit.
    pub max_recycles: Option<u32>,
    /// Whether every accepted move re-checks that all 52 cards are on the
    /// table exactly once.
    pub verify_integrity: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            shuffle_on_recycle: true,
            max_recycles: None,
            verify_integrity: true,
        }
    }
}

impl GameOptions {
    /// Sets whether the spent pile is reshuffled on recycle.
    ///
    /// # Example
    ///
    /// ```
    /// use klondike::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_on_recycle(false);
    /// assert_eq!(options.shuffle_on_recycle, false);
    /// ```
    #[must_use]
    pub const fn with_shuffle_on_recycle(mut self, shuffle: bool) -> Self {
        self.shuffle_on_recycle = shuffle;
        self
    }

    /// Sets the recycle limit.
    ///
    /// # Example
    ///
    /// ```
    /// use klondike::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_recycles(Some(3));
    /// assert_eq!(options.max_recycles, Some(3));
    /// ```
    #[must_use]
    pub const fn with_max_recycles(mut self, limit: Option<u32>) -> Self {
        self.max_recycles = limit;
        self
    }

    /// Sets whether accepted moves re-check card integrity.
    ///
    /// # Example
    ///
    /// ```
    /// use klondike::GameOptions;
    ///
    /// let options = GameOptions::default().with_verify_integrity(false);
    /// assert_eq!(options.verify_integrity, false);
    /// ```
    #[must_use]
    pub const fn with_verify_integrity(mut self, verify: bool) -> Self {
        self.verify_integrity = verify;
        self
    }
}
