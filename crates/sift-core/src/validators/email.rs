//! Email-shape check shared by the signup and upload validators.

/// Shape check equivalent to the pattern `^[^@\s]+@[^@\s]+\.[^@\s]+$`:
/// a non-empty local part with no `@` or whitespace, a single `@`, then a
/// domain with no `@` or whitespace containing at least one `.` that is
/// neither its first nor its last character.
///
/// This is a shape check, not RFC 5322 - it exists to catch obviously
/// malformed addresses, exactly as permissively as the pattern above.
pub fn is_email_shaped(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }

    // At least one interior dot. The character class allows dots, so
    // "a..b" and "a.b." both pass, matching the pattern.
    let len = domain.chars().count();
    domain
        .chars()
        .enumerate()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("a@b.c")]
    #[case::common("user@example.com")]
    #[case::dotted_local("first.last@sub.example.com")]
    #[case::plus_tag("user+tag@example.co")]
    #[case::double_dot("a@b..c")]
    #[case::trailing_dot_domain("a@b.c.")]
    fn accepts_email_shaped_strings(#[case] s: &str) {
        assert!(is_email_shaped(s), "{s:?} should be accepted");
    }

    #[rstest]
    #[case::empty("")]
    #[case::no_at("user.example.com")]
    #[case::two_ats("a@@b.c")]
    #[case::at_in_domain("a@b@c.d")]
    #[case::empty_local("@b.c")]
    #[case::space_in_local("a b@c.d")]
    #[case::space_in_domain("a@c .d")]
    #[case::no_dot("a@bc")]
    #[case::dot_first("a@.bc")]
    #[case::dot_last("a@bc.")]
    #[case::bare_at("@")]
    fn rejects_malformed_strings(#[case] s: &str) {
        assert!(!is_email_shaped(s), "{s:?} should be rejected");
    }
}
