use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const MIN_PHONE_DIGITS: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Inquiry,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Name, Field::Email, Field::Phone, Field::Inquiry, Field::Message];

    /// DOM id of the input inside `#contactForm`.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Inquiry => "inquiry",
            Field::Message => "message",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Field::Name => "Please enter your name.",
            Field::Email => "Please enter a valid email address.",
            Field::Phone => "Please enter a valid phone number.",
            Field::Inquiry => "Please choose what you're contacting us about.",
            Field::Message => "Please write a short message.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InquiryKind {
    General,
    Project,
    Pricing,
    Support,
    Careers,
}

impl InquiryKind {
    pub const ALL: [InquiryKind; 5] = [
        InquiryKind::General,
        InquiryKind::Project,
        InquiryKind::Pricing,
        InquiryKind::Support,
        InquiryKind::Careers,
    ];

    pub fn value(self) -> &'static str {
        match self {
            InquiryKind::General => "general",
            InquiryKind::Project => "project",
            InquiryKind::Pricing => "pricing",
            InquiryKind::Support => "support",
            InquiryKind::Careers => "careers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InquiryKind::General => "General question",
            InquiryKind::Project => "New project",
            InquiryKind::Pricing => "Pricing & quotes",
            InquiryKind::Support => "Existing client support",
            InquiryKind::Careers => "Careers",
        }
    }
}

impl FromStr for InquiryKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryKind::ALL
            .into_iter()
            .find(|kind| kind.value() == s.trim())
            .ok_or(())
    }
}

impl fmt::Display for InquiryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw field values as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `value` of the selected `<option>`, empty while the placeholder is selected.
    pub inquiry: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Inquiry => &self.inquiry,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Inquiry => self.inquiry = value,
            Field::Message => self.message = value,
        }
    }

    pub fn inquiry_kind(&self) -> Option<InquiryKind> {
        self.inquiry.parse().ok()
    }

    pub fn validate(&self) -> Validation {
        let invalid = Field::ALL
            .into_iter()
            .filter(|&field| !self.field_ok(field))
            .collect();
        Validation { invalid }
    }

    fn field_ok(&self, field: Field) -> bool {
        let value = self.get(field).trim();
        match field {
            Field::Name | Field::Message => !value.is_empty(),
            Field::Email => is_valid_email(value),
            Field::Phone => value.is_empty() || is_valid_phone(value),
            Field::Inquiry => self.inquiry_kind().is_some(),
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

fn is_valid_phone(value: &str) -> bool {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '(' | ')' | '-' | '.'));
    let digits = value.chars().filter(char::is_ascii_digit).count();
    allowed && digits >= MIN_PHONE_DIGITS
}

/// Per-field outcome; drives the `is-invalid` class on each input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Validation {
    invalid: Vec<Field>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    pub fn invalid_fields(&self) -> &[Field] {
        &self.invalid
    }

    /// Drops the flag on a field the visitor has started editing.
    pub fn clear(&mut self, field: Field) {
        self.invalid.retain(|&f| f != field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            inquiry: "project".to_string(),
            message: "We need a new landing page.".to_string(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(filled().validate().is_valid());
    }

    #[test]
    fn blank_required_fields_are_flagged() {
        let form = ContactForm::default();
        let v = form.validate();
        assert!(!v.is_valid());
        for field in [Field::Name, Field::Email, Field::Inquiry, Field::Message] {
            assert!(v.is_invalid(field), "{:?} should be invalid", field);
        }
        assert!(!v.is_invalid(Field::Phone));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.name = "   ".to_string();
        form.message = "\n\t".to_string();
        let v = form.validate();
        assert_eq!(v.invalid_fields(), &[Field::Name, Field::Message]);
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" first.last+tag@sub.example.org "));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("no@tld"));
        assert!(!is_valid_email("two words@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn phone_is_optional_but_checked_when_given() {
        let mut form = filled();
        form.phone = "+1 (555) 010-9999".to_string();
        assert!(form.validate().is_valid());
        form.phone = "call me".to_string();
        assert!(form.validate().is_invalid(Field::Phone));
        form.phone = "12345".to_string();
        assert!(form.validate().is_invalid(Field::Phone));
    }

    #[test]
    fn unknown_inquiry_is_invalid() {
        let mut form = filled();
        form.inquiry = "spam".to_string();
        assert!(form.validate().is_invalid(Field::Inquiry));
        assert_eq!(filled().inquiry_kind(), Some(InquiryKind::Project));
    }

    #[test]
    fn clearing_a_field_flag() {
        let mut v = ContactForm::default().validate();
        v.clear(Field::Name);
        assert!(!v.is_invalid(Field::Name));
        assert!(v.is_invalid(Field::Email));
    }
}
