use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::config;

// Working schedule for discovery calls. The contact section advertises the
// same window, so keep them in sync.
pub const OPENING_HOUR: u32 = 9;
pub const CLOSING_HOUR: u32 = 18;
pub const SLOT_STEP_MINUTES: u32 = 30;
pub const APPOINTMENT_MINUTES: i64 = 15;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const SLOT_FORMAT: &str = "%H:%M";

const CALENDAR_BASE: &str = "https://calendar.google.com/calendar/render";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub message: String,
}

impl BookingForm {
    pub fn contact_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
    }

    pub fn schedule_complete(&self) -> bool {
        match parse_date(&self.date) {
            Some(date) => is_bookable(date) && parse_slot(&self.time).is_some(),
            None => false,
        }
    }

    pub fn start_datetime(&self) -> Option<NaiveDateTime> {
        Some(parse_date(&self.date)?.and_time(parse_slot(&self.time)?))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    Contact,
    Schedule,
    Confirm,
    Done,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Contact,
        WizardStep::Schedule,
        WizardStep::Confirm,
        WizardStep::Done,
    ];

    pub fn index(self) -> u8 {
        match self {
            WizardStep::Contact => 1,
            WizardStep::Schedule => 2,
            WizardStep::Confirm => 3,
            WizardStep::Done => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Contact => "Info",
            WizardStep::Schedule => "Schedule",
            WizardStep::Confirm => "Confirm",
            WizardStep::Done => "Done",
        }
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

pub fn parse_slot(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, SLOT_FORMAT).ok()
}

pub fn slot_label(slot: NaiveTime) -> String {
    slot.format(SLOT_FORMAT).to_string()
}

pub fn is_bookable(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn next_bookable(date: NaiveDate) -> NaiveDate {
    let mut day = date;
    while !is_bookable(day) {
        day += Duration::days(1);
    }
    day
}

pub fn day_slots(date: NaiveDate) -> Vec<NaiveTime> {
    if !is_bookable(date) {
        return Vec::new();
    }
    (OPENING_HOUR * 60..CLOSING_HOUR * 60)
        .step_by(SLOT_STEP_MINUTES as usize)
        .filter_map(|minutes| NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0))
        .collect()
}

// Slots at or before the current wall-clock time are gone for today.
pub fn available_slots(date: NaiveDate, now: NaiveDateTime) -> Vec<NaiveTime> {
    let mut slots = day_slots(date);
    if date == now.date() {
        slots.retain(|slot| *slot > now.time());
    }
    slots
}

pub fn calendar_event_url(form: &BookingForm) -> Option<String> {
    let start = form.start_datetime()?;
    let end = start + Duration::minutes(APPOINTMENT_MINUTES);

    let title = format!("Discovery Call - Interior Design Consultation with {}", config::STUDIO_NAME);
    let details = format!(
        "Interior design consultation with {}\n\nPhone: {}\nEmail: {}\n\nMessage: {}",
        form.name,
        form.phone,
        form.email,
        if form.message.trim().is_empty() {
            "No additional message"
        } else {
            form.message.trim()
        },
    );

    let stamp = "%Y%m%dT%H%M%S";
    Some(format!(
        "{}?action=TEMPLATE&text={}&details={}&dates={}/{}&add={}",
        CALENDAR_BASE,
        urlencoding::encode(&title),
        urlencoding::encode(&details),
        start.format(stamp),
        end.format(stamp),
        urlencoding::encode(config::STUDIO_EMAIL),
    ))
}

pub fn whatsapp_booking_link(form: &BookingForm) -> String {
    let text = format!(
        "Hi! I'm {} - I just booked a discovery call for {} at {}.",
        form.name, form.date, form.time
    );
    format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_NUMBER,
        urlencoding::encode(&text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-01 was a Monday, which makes the first week of January a
    // convenient fixture: Fri 5th, Sat 6th, Sun 7th, Mon 8th.
    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        date(day).and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
    }

    fn form(date: &str, time: &str) -> BookingForm {
        BookingForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "+1 555 123 4567".into(),
            date: date.into(),
            time: time.into(),
            message: String::new(),
        }
    }

    #[test]
    fn weekends_are_not_bookable() {
        assert!(is_bookable(date(5)), "Friday");
        assert!(!is_bookable(date(6)), "Saturday");
        assert!(!is_bookable(date(7)), "Sunday");
        assert!(is_bookable(date(8)), "Monday");
    }

    #[test]
    fn weekend_dates_advance_to_the_next_monday() {
        assert_eq!(next_bookable(date(6)), date(8));
        assert_eq!(next_bookable(date(7)), date(8));
        assert_eq!(next_bookable(date(5)), date(5));
    }

    #[test]
    fn a_weekday_has_eighteen_half_hour_slots() {
        let slots = day_slots(date(8));
        assert_eq!(slots.len(), 18);
        assert_eq!(slot_label(slots[0]), "09:00");
        assert_eq!(slot_label(slots[1]), "09:30");
        assert_eq!(slot_label(*slots.last().unwrap()), "17:30");
    }

    #[test]
    fn weekend_days_have_no_slots() {
        assert!(day_slots(date(6)).is_empty());
        assert!(available_slots(date(7), at(7, 8, 0)).is_empty());
    }

    #[test]
    fn todays_elapsed_slots_are_filtered_out() {
        // 10:00 on the nose: the 10:00 slot is already gone, 10:30 is next.
        let slots = available_slots(date(8), at(8, 10, 0));
        assert_eq!(slot_label(slots[0]), "10:30");
        assert_eq!(slots.len(), 15);

        let late = available_slots(date(8), at(8, 17, 45));
        assert!(late.is_empty());
    }

    #[test]
    fn future_dates_keep_the_full_schedule() {
        let slots = available_slots(date(9), at(8, 16, 0));
        assert_eq!(slots.len(), 18);
    }

    #[test]
    fn slot_list_is_deterministic_per_date() {
        assert_eq!(day_slots(date(8)), day_slots(date(8)));
        assert_eq!(available_slots(date(9), at(8, 12, 0)), day_slots(date(9)));
    }

    #[test]
    fn contact_step_requires_all_three_fields() {
        let mut f = form("2024-01-08", "10:00");
        assert!(f.contact_complete());

        f.phone = "   ".into();
        assert!(!f.contact_complete());

        f.phone = "+1 555 123 4567".into();
        f.name.clear();
        assert!(!f.contact_complete());
    }

    #[test]
    fn schedule_step_requires_a_bookable_date_and_a_time() {
        assert!(form("2024-01-08", "10:00").schedule_complete());
        assert!(!form("", "10:00").schedule_complete());
        assert!(!form("2024-01-08", "").schedule_complete());
        assert!(!form("2024-01-06", "10:00").schedule_complete(), "Saturday");
        assert!(!form("not-a-date", "10:00").schedule_complete());
    }

    #[test]
    fn calendar_link_spans_fifteen_minutes() {
        let url = calendar_event_url(&form("2024-01-08", "10:00")).unwrap();
        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE"));
        assert!(url.contains("dates=20240108T100000/20240108T101500"));
        assert!(url.contains(&urlencoding::encode(config::STUDIO_EMAIL).into_owned()));
    }

    #[test]
    fn calendar_link_requires_parseable_date_and_time() {
        assert!(calendar_event_url(&form("2024-01-08", "later")).is_none());
        assert!(calendar_event_url(&form("soon", "10:00")).is_none());
    }

    #[test]
    fn whatsapp_link_targets_the_studio_number() {
        let link = whatsapp_booking_link(&form("2024-01-08", "10:00"));
        assert!(link.starts_with(&format!("https://wa.me/{}?text=", config::WHATSAPP_NUMBER)));
        assert!(link.contains("Jane%20Doe"));
    }
}
