use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use tracing::warn;

/// Zone manifests express timestamps in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerZone {
    /// The host's local zone, including its daylight saving rules.
    #[default]
    Local,
    /// A fixed offset east of UTC, in minutes.
    FixedMinutes(i32),
}

impl ServerZone {
    fn offset_at(self, utc: &NaiveDateTime) -> Option<FixedOffset> {
        match self {
            ServerZone::Local => Some(Local.offset_from_utc_datetime(utc)),
            ServerZone::FixedMinutes(minutes) => {
                FixedOffset::east_opt(minutes.checked_mul(60)?)
            }
        }
    }

    /// Current time in this zone, or in the host zone if the configured
    /// offset is unusable.
    pub fn now(self) -> DateTime<FixedOffset> {
        let now = Utc::now();
        match self.offset_at(&now.naive_utc()) {
            Some(offset) => now.with_timezone(&offset),
            None => now.with_timezone(&Local).fixed_offset(),
        }
    }

    /// Expresses a stored UTC wall-clock timestamp in this zone.
    ///
    /// `None` when the offset is out of range or the shifted value falls
    /// outside the representable calendar.
    pub fn convert(self, stored: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        let offset = self.offset_at(&stored)?;
        stored.checked_add_offset(offset)?;
        Some(DateTime::from_naive_utc_and_offset(stored, offset))
    }

    /// [`convert`](Self::convert), substituting the current time when the
    /// conversion fails. The substitution is logged as a warning so the
    /// inconsistent record can be tracked down.
    pub fn convert_or_now(
        self,
        stored: NaiveDateTime,
        context: &str,
    ) -> DateTime<FixedOffset> {
        self.convert(stored).unwrap_or_else(|| {
            warn!(
                %stored,
                zone = ?self,
                context,
                "timestamp cannot be expressed in server zone; using current time"
            );
            self.now()
        })
    }
}
