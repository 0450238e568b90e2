use std::time::Duration;

/// Human-readable duration with a unit chosen by magnitude.
///
/// Sub-10 values of a unit fall back to the next finer one, e.g. `9ms` is
/// shown as `9000μs` and `7s` as `7000ms`.
pub fn format_duration(d: Duration) -> String {
    if d.as_micros() < 10 {
        return format!("{}ns", d.as_nanos());
    }
    if d.as_millis() < 10 {
        return format!("{}μs", d.as_micros());
    }
    if d.as_secs() < 10 {
        return format!("{}ms", d.as_millis());
    }

    let ms = d.as_millis() % 1000;
    let secs = d.as_secs();
    if secs < 60 {
        return format!("{secs}s {ms}ms");
    }

    let mins = secs / 60;
    let secs = secs % 60;
    if mins < 60 {
        return format!("{mins}m {secs}s {ms}ms");
    }

    let hours = mins / 60;
    let mins = mins % 60;
    format!("{hours}h {mins}m {secs}s {ms}ms")
}
