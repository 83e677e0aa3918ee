//! Clock-face formatting for the bar label

const HOUR: u64 = 3600;
const MINUTE: u64 = 60;

/// Format seconds as `MM:SS`, or `HH:MM:SS` from one hour up.
///
/// Every field is zero-padded to two digits. Hours keep growing past two
/// digits instead of wrapping.
pub fn format_clock(seconds: u64) -> String {
    let units: &[u64] = if seconds >= HOUR {
        &[HOUR, MINUTE, 1]
    } else {
        &[MINUTE, 1]
    };

    let mut remaining = seconds;
    let fields: Vec<String> = units
        .iter()
        .map(|unit| {
            let value = remaining / unit;
            remaining -= value * unit;
            format!("{:02}", value)
        })
        .collect();

    fields.join(":")
}

/// Clamp a signed tick delta before formatting.
pub fn format_delta(delta: i64) -> String {
    format_clock(u64::try_from(delta).unwrap_or(0))
}
