use serde::{Deserialize, Serialize};

/// Loan state of a copy. Rows store the single-letter codes m/o/a/r.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    Maintenance,
    OnLoan,
    Available,
    Reserved,
}

impl LoanStatus {
    pub fn as_code(&self) -> &'static str {
        match self {
            LoanStatus::Maintenance => "m",
            LoanStatus::OnLoan => "o",
            LoanStatus::Available => "a",
            LoanStatus::Reserved => "r",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "m" => Some(LoanStatus::Maintenance),
            "o" => Some(LoanStatus::OnLoan),
            "a" => Some(LoanStatus::Available),
            "r" => Some(LoanStatus::Reserved),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::LoanStatus;

    #[test]
    fn codes_match_storage_format() {
        assert_eq!(LoanStatus::from_code("o"), Some(LoanStatus::OnLoan));
        assert_eq!(LoanStatus::OnLoan.as_code(), "o");
        assert_eq!(LoanStatus::from_code("x"), None);
    }
}
