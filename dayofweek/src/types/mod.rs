pub mod dow_error;
pub mod ordered_labels;
pub mod weekday;

pub use dow_error::{DowError, DowResult};
pub use ordered_labels::{OrderedWeekdayLabels, WeekdayLabel};
pub use weekday::{WeekIter, Weekday};
