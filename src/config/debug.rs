//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every submission as it is dispatched and resolved.
    pub log_submissions: bool,

    /// Log resolutions thrown away because a newer submission superseded them.
    pub log_stale_discards: bool,

    /// Anything about chart pan/zoom resets
    pub log_chart_resets: bool,

    /// Dump the outbound JSON payload before sending it
    pub log_payloads: bool,
}

pub const DF: LogFlags = LogFlags {
    log_submissions: true,
    log_stale_discards: true,

    log_chart_resets: false,
    log_payloads: false,
};
