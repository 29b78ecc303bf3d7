// SPDX-License-Identifier: MPL-2.0
//! Clock text for the elapsed/duration labels.

use chrono::{DateTime, Utc};

/// Largest millisecond offset a clock value may take (±100 000 000 days).
const MAX_OFFSET_MILLIS: f64 = 8.64e15;

/// Formats a media offset in seconds as `HH:MM:SS`.
///
/// The offset is placed on the Unix epoch and the UTC time of day is read
/// back, so milliseconds are truncated and offsets of a day or more wrap.
/// Returns `None` for offsets that are not numbers or out of range.
///
/// # Examples
///
/// ```
/// use video_block::widget::format_clock;
///
/// assert_eq!(format_clock(65.0).as_deref(), Some("00:01:05"));
/// assert_eq!(format_clock(3599.999).as_deref(), Some("00:59:59"));
/// assert_eq!(format_clock(f64::NAN), None);
/// ```
#[must_use]
pub fn format_clock(secs: f64) -> Option<String> {
    let millis = (secs * 1000.0).trunc();
    if !millis.is_finite() || millis.abs() > MAX_OFFSET_MILLIS {
        return None;
    }

    #[allow(clippy::cast_possible_truncation)]
    let at = DateTime::<Utc>::from_timestamp_millis(millis as i64)?;
    Some(at.format("%H:%M:%S").to_string())
}
