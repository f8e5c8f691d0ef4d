use std::fmt::{Display, Formatter};

/// Status codes a download accepts.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ResponseStatus {
    /// 200: the whole resource, the range was ignored or never sent.
    Complete,
    /// 206: the requested range, the resume was honored.
    Partial,
    /// 416: nothing left past the offset, usually an already finished file.
    RangeNotSatisfiable,
}

impl ResponseStatus {
    pub fn classify(code: u16) -> Option<ResponseStatus> {
        match code {
            200 => Some(ResponseStatus::Complete),
            206 => Some(ResponseStatus::Partial),
            416 => Some(ResponseStatus::RangeNotSatisfiable),
            _ => None,
        }
    }

    pub fn code(&self) -> u16 {
        u16::from(*self)
    }
}

impl Display for ResponseStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseStatus::Complete => write!(f, "Complete"),
            ResponseStatus::Partial => write!(f, "Partial"),
            ResponseStatus::RangeNotSatisfiable => write!(f, "RangeNotSatisfiable"),
        }
    }
}

impl From<ResponseStatus> for u16 {
    fn from(status: ResponseStatus) -> u16 {
        match status {
            ResponseStatus::Complete => 200,
            ResponseStatus::Partial => 206,
            ResponseStatus::RangeNotSatisfiable => 416,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::response_status::ResponseStatus;

    #[test]
    fn test_accepted_codes() {
        assert_eq!(ResponseStatus::classify(200), Some(ResponseStatus::Complete));
        assert_eq!(ResponseStatus::classify(206), Some(ResponseStatus::Partial));
        assert_eq!(ResponseStatus::classify(416), Some(ResponseStatus::RangeNotSatisfiable));
        for status in [ResponseStatus::Complete, ResponseStatus::Partial, ResponseStatus::RangeNotSatisfiable] {
            assert_eq!(ResponseStatus::classify(status.code()), Some(status));
        }
    }

    #[test]
    fn test_other_codes_rejected() {
        for code in [100, 201, 204, 301, 304, 400, 403, 404, 500, 503] {
            assert_eq!(ResponseStatus::classify(code), None, "code {}", code);
        }
    }
}
