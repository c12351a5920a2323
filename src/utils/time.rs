use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone, Utc};

/// Returns start of the next day.
pub fn next_day_start<Tz: TimeZone>(date: DateTime<Tz>) -> DateTime<Tz> {
    let next = date + Duration::days(1);
    next.clone().with_time(NaiveTime::MIN).earliest().unwrap_or(next)
}

/// This is the standard way of showing an entry moment to a user.
pub fn format_moment(moment: DateTime<Utc>) -> String {
    moment.with_timezone(&Local).format("%x %H:%M:%S").to_string()
}
