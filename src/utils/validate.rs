use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

// 允许空格、点、连字符分隔，可带国际区号
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 .-]{7,18}[0-9]$").expect("Invalid phone regex"));

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err("Adresse e-mail invalide");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if !PHONE_RE.is_match(phone.trim()) {
        return Err("Numéro de téléphone invalide");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(validate_email("jean.dupont@example.com").is_ok());
        assert!(validate_email("jean.dupont@").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("0123456789").is_ok());
        assert!(validate_phone("+33 1 23 45 67 89").is_ok());
        assert!(validate_phone("01-23").is_err());
        assert!(validate_phone("abcdefghij").is_err());
    }
}
