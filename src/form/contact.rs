use std::collections::HashMap;

/// Contact fields the form tracks validation errors for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Email,
    Phone,
}

/// Contact details collected in the final step before submission.
///
/// Only the email is required; a phone number is optional but checked for
/// shape when present.
#[derive(Clone, Debug, Default)]
pub struct ContactData {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub role: Option<String>,
    pub company_stage: Option<String>,
    pub phone: Option<String>,
    pub madtech_interest: Option<String>,
}

impl ContactData {
    /// Check the contact step. Returns an empty map when submission may
    /// proceed, otherwise one message per offending field.
    pub fn validate(&self) -> HashMap<ContactField, String> {
        let mut errors = HashMap::new();

        if self.email.is_empty() {
            errors.insert(ContactField::Email, "Email is required".to_owned());
        } else if let Err(message) = validate_email(&self.email) {
            errors.insert(ContactField::Email, message);
        }

        if let Some(phone) = &self.phone
            && !phone.is_empty()
            && let Err(message) = validate_phone(phone)
        {
            errors.insert(ContactField::Phone, message);
        }

        errors
    }
}

/// Minimal email shape check: one `@`, a dot somewhere in the domain, no
/// whitespace, nothing empty on either side.
fn validate_email(email: &str) -> Result<(), String> {
    let invalid = || Err("Invalid email".to_owned());

    if email.chars().any(|c| c.is_whitespace()) {
        return invalid();
    }
    let Some((local, domain)) = email.split_once('@') else {
        return invalid();
    };
    if local.is_empty() || domain.contains('@') {
        return invalid();
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return invalid();
    };
    if host.is_empty() || tld.is_empty() {
        return invalid();
    }
    Ok(())
}

/// Phone numbers may contain digits, whitespace and the usual punctuation.
fn validate_phone(phone: &str) -> Result<(), String> {
    let allowed =
        |c: char| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '+' | '(' | ')');
    if phone.chars().all(allowed) {
        Ok(())
    } else {
        Err("Invalid phone number".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_required() {
        let contact = ContactData::default();
        let errors = contact.validate();
        assert_eq!(errors.get(&ContactField::Email).unwrap(), "Email is required");
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["plainaddress", "a b@example.com", "@example.com", "user@domain"] {
            let contact = ContactData {
                email: email.to_owned(),
                ..ContactData::default()
            };
            assert_eq!(
                contact.validate().get(&ContactField::Email).unwrap(),
                "Invalid email",
                "{email} should be invalid"
            );
        }
    }

    #[test]
    fn valid_contact_passes() {
        let contact = ContactData {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            phone: Some("+52 (123) 456-7890".to_owned()),
            ..ContactData::default()
        };
        assert!(contact.validate().is_empty());
    }

    #[test]
    fn phone_is_optional_but_checked_when_present() {
        let mut contact = ContactData {
            email: "ada@example.com".to_owned(),
            ..ContactData::default()
        };
        assert!(contact.validate().is_empty());

        contact.phone = Some("call me maybe".to_owned());
        assert_eq!(
            contact.validate().get(&ContactField::Phone).unwrap(),
            "Invalid phone number"
        );
    }
}
