use std::fmt;

use serde::{Serialize, Serializer};

const LEFT_PAGE: &str = "LEFT";
const RIGHT_PAGE: &str = "RIGHT";

/// Single entry of a page window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    Number(u64),
    LeftEllipsis,
    RightEllipsis,
}

impl PageToken {
    pub fn page(&self) -> Option<u64> {
        match self {
            PageToken::Number(page) => Some(*page),
            _ => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        self.page().is_none()
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Number(page) => write!(f, "{}", page),
            PageToken::LeftEllipsis => f.write_str(LEFT_PAGE),
            PageToken::RightEllipsis => f.write_str(RIGHT_PAGE),
        }
    }
}

// Numbers stay numbers, markers become the "LEFT"/"RIGHT" strings.
impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Number(page) => serializer.serialize_u64(*page),
            PageToken::LeftEllipsis => serializer.serialize_str(LEFT_PAGE),
            PageToken::RightEllipsis => serializer.serialize_str(RIGHT_PAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_mixed_tokens() {
        let tokens = vec![
            PageToken::Number(1),
            PageToken::LeftEllipsis,
            PageToken::Number(5),
            PageToken::RightEllipsis,
            PageToken::Number(10),
        ];

        let json = serde_json::to_string(&tokens).unwrap();

        assert_eq!(json, r#"[1,"LEFT",5,"RIGHT",10]"#);
    }

    #[test]
    fn test_page_accessor() {
        assert_eq!(PageToken::Number(3).page(), Some(3));
        assert!(PageToken::LeftEllipsis.is_ellipsis());
        assert_eq!(PageToken::RightEllipsis.to_string(), "RIGHT");
    }
}
