//! Constants shared across the normalization, timing and signature layers.

/// Default expected cadence between `ping` beacons during main content, in
/// seconds.
pub const DEFAULT_MAIN_CADENCE_SECS: f64 = 10.0;

/// Default expected cadence between `ping` beacons during an ad, in seconds.
pub const DEFAULT_AD_CADENCE_SECS: f64 = 1.0;

/// Default allowed deviation from the expected cadence, in seconds.
pub const DEFAULT_TOLERANCE_SECS: f64 = 2.0;

/// Default maximum edit distance before a sequence signature is flagged as
/// anomalous.
pub const DEFAULT_MAX_SIGNATURE_DISTANCE: usize = 0;

/// Heartbeat/media-collection event type literals recognized by the
/// ordering state machine and timing validator.
pub mod event_type {
    pub const SESSION_START: &str = "sessionStart";
    pub const PLAY: &str = "play";
    pub const PING: &str = "ping";
    pub const PAUSE_START: &str = "pauseStart";
    pub const BUFFER_START: &str = "bufferStart";
    pub const AD_BREAK_START: &str = "adBreakStart";
    pub const AD_START: &str = "adStart";
    pub const AD_COMPLETE: &str = "adComplete";
    pub const AD_BREAK_COMPLETE: &str = "adBreakComplete";
    pub const SESSION_END: &str = "sessionEnd";
    pub const SESSION_COMPLETE: &str = "sessionComplete";
    pub const COMPLETE: &str = "complete";
}

/// Single-character symbol alphabet used by the sequence signature. Unknown
/// event types collapse to [`UNKNOWN_SYMBOL`].
///
/// `complete` and `sessionEnd` intentionally collide on `E` — this mirrors
/// the source system and is documented, not a bug (see design notes).
/// `sessionComplete` is deliberately absent and falls through to
/// [`UNKNOWN_SYMBOL`], matching the original alphabet.
pub const SYMBOL_TABLE: &[(&str, char)] = &[
    (event_type::SESSION_START, 'S'),
    (event_type::PLAY, 'P'),
    (event_type::PING, 'p'),
    (event_type::PAUSE_START, 'U'),
    (event_type::BUFFER_START, 'B'),
    (event_type::COMPLETE, 'E'),
    (event_type::SESSION_END, 'E'),
    (event_type::AD_START, 'A'),
    (event_type::AD_COMPLETE, 'a'),
    (event_type::AD_BREAK_START, 'R'),
    (event_type::AD_BREAK_COMPLETE, 'r'),
];

/// Symbol used for event types absent from [`SYMBOL_TABLE`].
pub const UNKNOWN_SYMBOL: char = 'X';
