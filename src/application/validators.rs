use validator::ValidateEmail;

/// Checks email syntax with the same intent as the signup form's schema, so
/// bypassing the form does not loosen the contract.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_addresses_the_signup_form_would() {
        assert!(is_valid_email("founder@example.com"));
        assert!(is_valid_email("ops+waitlist@shop.io"));
        assert!(is_valid_email("first.last@agency.co.uk"));
    }

    #[test]
    fn accepts_addresses_with_surrounding_whitespace() {
        assert!(is_valid_email("  founder@example.com  "));
    }

    #[test]
    fn rejects_blank_and_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("  "));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing-domain@"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("two words@example.com"));
    }
}
