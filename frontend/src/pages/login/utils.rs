/// Client-side check before a login request is sent.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err("Username and password are required".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_credentials;

    #[test]
    fn accepts_filled_credentials() {
        assert!(validate_credentials("admin", "secret").is_ok());
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("admin", "").is_err());
        assert!(validate_credentials("   ", "secret").is_err());
    }
}
