//! Display trait and day-of-month constants.

/// Smallest configurable day of month.
pub const MIN_DAY_OF_MONTH: u32 = 1;
/// Largest configurable day of month, independent of any month's length.
pub const MAX_DAY_OF_MONTH: u32 = 31;

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Returns `true` when `day` is a configurable day of month (1..=31).
pub fn is_day_of_month(day: u32) -> bool {
    (MIN_DAY_OF_MONTH..=MAX_DAY_OF_MONTH).contains(&day)
}

/// Folds a day value that overshoots 31 back into the 1..=31 range by
/// subtracting 31, so `closing + offset` lands early in a later month
/// instead of being pinned to the 31st.
pub fn wrap_day_of_month(value: u32) -> u32 {
    if value > MAX_DAY_OF_MONTH {
        (value - 1) % MAX_DAY_OF_MONTH + 1
    } else {
        value
    }
}
