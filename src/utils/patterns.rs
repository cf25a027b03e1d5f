//! 사용자 식별 필드의 형식 규칙
//!
//! URL 경로 파라미터와 요청 본문 검증이 같은 정규식을 공유합니다.

use once_cell::sync::Lazy;
use regex::Regex;

/// 휴대폰 번호: 1로 시작하고 두 번째 자리가 3-9인 11자리 숫자
static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3-9]\d{9}$").expect("valid mobile regex"));

/// 경로 파라미터로 허용되는 사용자명 (`\w{5,20}`)
static USERNAME_SEGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w{5,20}$").expect("valid username regex"));

/// 사용자명에 허용되는 문자 (단어 문자와 `.@+-`)
static USERNAME_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.@+-]*$").expect("valid username charset regex"));

pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}

pub fn is_valid_username_segment(username: &str) -> bool {
    USERNAME_SEGMENT_RE.is_match(username)
}

pub fn has_valid_username_chars(username: &str) -> bool {
    USERNAME_CHARS_RE.is_match(username)
}

/// 로그 출력용으로 휴대폰 번호 가운데 4자리를 가립니다.
///
/// ```
/// use mall_users_service::utils::patterns::mask_mobile;
///
/// assert_eq!(mask_mobile("13900001111"), "139****1111");
/// assert_eq!(mask_mobile("abc"), "***");
/// ```
pub fn mask_mobile(mobile: &str) -> String {
    if !mobile.is_ascii() || mobile.len() != 11 {
        return "*".repeat(mobile.chars().count());
    }
    format!("{}****{}", &mobile[..3], &mobile[7..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("13900001111", true)]
    #[case("19912345678", true)]
    #[case("12900001111", false)]
    #[case("23900001111", false)]
    #[case("1390000111", false)]
    #[case("139000011112", false)]
    #[case("1390000111a", false)]
    #[case("", false)]
    fn test_mobile_pattern(#[case] mobile: &str, #[case] expected: bool) {
        assert_eq!(is_valid_mobile(mobile), expected);
    }

    #[rstest]
    #[case("alice1", true)]
    #[case("alice_bob_1", true)]
    #[case("한글사용자명", true)]
    #[case("abcd", false)]
    #[case("abcdefghijklmnopqrstu", false)]
    #[case("alice.bob", false)]
    fn test_username_segment_pattern(#[case] username: &str, #[case] expected: bool) {
        assert_eq!(is_valid_username_segment(username), expected);
    }

    #[test]
    fn test_username_chars() {
        assert!(has_valid_username_chars("alice.bob+shop@x-1"));
        assert!(!has_valid_username_chars("alice bob"));
        assert!(!has_valid_username_chars("alice/bob"));
    }

    #[test]
    fn test_mask_mobile() {
        assert_eq!(mask_mobile("13900001111"), "139****1111");
        assert_eq!(mask_mobile("short"), "*****");
    }
}
