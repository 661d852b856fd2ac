//! Diesel schema for game administration.

diesel::table! {
    /// Games offered to players.
    games (name) {
        /// Unique game name.
        name -> Text,
        /// Whether the game is hidden from players.
        disabled -> Bool,
    }
}
