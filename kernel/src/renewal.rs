use std::fmt::Display;

use error_stack::Context;
use time::{Date, Duration};

/// Librarians may push a due date at most four weeks past the current day.
pub const RENEWAL_WINDOW: Duration = Duration::days(28);

/// Offset pre-filled into the renewal form before the librarian edits it.
pub const PROPOSED_RENEWAL_OFFSET: Duration = Duration::weeks(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewalError {
    PastDate,
    TooFarAhead,
}

impl Display for RenewalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenewalError::PastDate => write!(f, "Invalid date - renewal in past"),
            RenewalError::TooFarAhead => {
                write!(f, "Invalid date - renewal more than 4 weeks ahead")
            }
        }
    }
}

impl Context for RenewalError {}

/// Decides whether a proposed due-back date is administratively legal.
///
/// Both bounds are inclusive: `today` itself and `today + 28 days` itself
/// pass. The window is a fixed calendar offset, not month-aware. On success
/// the candidate is returned unchanged; the caller owns assigning it to the
/// instance and persisting.
pub fn validate_renewal_date(candidate: Date, today: Date) -> Result<Date, RenewalError> {
    if candidate < today {
        return Err(RenewalError::PastDate);
    }
    if candidate > today + RENEWAL_WINDOW {
        return Err(RenewalError::TooFarAhead);
    }
    Ok(candidate)
}

/// Default date offered when a renewal form is opened: three weeks out.
pub fn propose_renewal_date(today: Date) -> Date {
    today + PROPOSED_RENEWAL_OFFSET
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use time::Duration;

    use super::{propose_renewal_date, validate_renewal_date, RenewalError};

    const TODAY: time::Date = date!(2024 - 01 - 01);

    #[test]
    fn accepts_whole_window() {
        let mut candidate = TODAY;
        while candidate <= TODAY + Duration::days(28) {
            assert_eq!(validate_renewal_date(candidate, TODAY), Ok(candidate));
            candidate += Duration::days(1);
        }
    }

    #[test]
    fn rejects_past_date() {
        assert_eq!(
            validate_renewal_date(date!(2023 - 12 - 31), TODAY),
            Err(RenewalError::PastDate)
        );
        assert_eq!(
            validate_renewal_date(date!(2020 - 06 - 15), TODAY),
            Err(RenewalError::PastDate)
        );
    }

    #[test]
    fn rejects_beyond_four_weeks() {
        assert_eq!(
            validate_renewal_date(date!(2024 - 01 - 30), TODAY),
            Err(RenewalError::TooFarAhead)
        );
        assert_eq!(
            validate_renewal_date(date!(2025 - 01 - 01), TODAY),
            Err(RenewalError::TooFarAhead)
        );
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(validate_renewal_date(TODAY, TODAY), Ok(TODAY));
        assert_eq!(
            validate_renewal_date(date!(2024 - 01 - 29), TODAY),
            Ok(date!(2024 - 01 - 29))
        );
        assert_eq!(
            validate_renewal_date(TODAY - Duration::days(1), TODAY),
            Err(RenewalError::PastDate)
        );
        assert_eq!(
            validate_renewal_date(TODAY + Duration::days(29), TODAY),
            Err(RenewalError::TooFarAhead)
        );
    }

    #[test]
    fn mid_window_date_is_returned_unchanged() {
        assert_eq!(
            validate_renewal_date(date!(2024 - 01 - 15), TODAY),
            Ok(date!(2024 - 01 - 15))
        );
    }

    #[test]
    fn validation_is_repeatable() {
        let first = validate_renewal_date(date!(2024 - 01 - 29), TODAY);
        let second = validate_renewal_date(date!(2024 - 01 - 29), TODAY);
        assert_eq!(first, second);
    }

    #[test]
    fn messages_match_form_errors() {
        assert_eq!(
            format!("{}", RenewalError::PastDate),
            "Invalid date - renewal in past"
        );
        assert_eq!(
            format!("{}", RenewalError::TooFarAhead),
            "Invalid date - renewal more than 4 weeks ahead"
        );
    }

    #[test]
    fn proposal_is_three_weeks_out() {
        assert_eq!(propose_renewal_date(TODAY), date!(2024 - 01 - 22));
    }
}
