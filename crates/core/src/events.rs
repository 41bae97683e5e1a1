//! Upcoming/past partitioning for workshops and events.
//!
//! The boundary is evaluated against a single `now` captured per request.
//! An event starting exactly at `now` is upcoming. The query side lives in
//! `EventRepo::list_window`.

/// Which side of `now` an events listing covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventWindow {
    /// `start_date >= now`, soonest first.
    #[default]
    Upcoming,
    /// `start_date < now`, most recent first.
    Past,
}

impl EventWindow {
    /// Interpret the `?type=` query value. Anything other than `past`
    /// (including no value) selects the upcoming window.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("past") => EventWindow::Past,
            _ => EventWindow::Upcoming,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventWindow::Upcoming => "upcoming",
            EventWindow::Past => "past",
        }
    }
}
