use serde::Serialize;

/// Minimum length the browser enforces on the "about" textarea.
pub const ABOUT_MIN_LENGTH: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationKind {
    Creator,
    Business,
}

impl RegistrationKind {
    pub fn badge(self) -> &'static str {
        match self {
            RegistrationKind::Creator => "Join as a Creator",
            RegistrationKind::Business => "Register as a Brand",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            RegistrationKind::Creator => "/images/emoji.png",
            RegistrationKind::Business => "/images/briefcase.png",
        }
    }

    /// Word used in the confirmation dialog ("Your Brand registration...").
    pub fn audience(self) -> &'static str {
        match self {
            RegistrationKind::Creator => "Creator",
            RegistrationKind::Business => "Brand",
        }
    }
}

/// Every input of the registration form, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Country,
    Niche,
    Instagram,
    Tiktok,
    About,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Country,
        Field::Niche,
        Field::Instagram,
        Field::Tiktok,
        Field::About,
    ];

    /// The `name` attribute of the input, which is also the JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Country => "country",
            Field::Niche => "niche",
            Field::Instagram => "instagram",
            Field::Tiktok => "tiktok",
            Field::About => "about",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn required(self) -> bool {
        !matches!(self, Field::Instagram | Field::Tiktok)
    }

    pub fn min_length(self) -> Option<usize> {
        match self {
            Field::About => Some(ABOUT_MIN_LENGTH),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstraintKind {
    Missing,
    TooShort { min: usize },
    InvalidEmail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub field: Field,
    pub kind: ConstraintKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub niche: String,
    pub instagram: String,
    pub tiktok: String,
    pub about: String,
}

impl RegistrationFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Country => &self.country,
            Field::Niche => &self.niche,
            Field::Instagram => &self.instagram,
            Field::Tiktok => &self.tiktok,
            Field::About => &self.about,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Country => &mut self.country,
            Field::Niche => &mut self.niche,
            Field::Instagram => &mut self.instagram,
            Field::Tiktok => &mut self.tiktok,
            Field::About => &mut self.about,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f).is_empty())
    }

    /// Applies the same `required`, `type="email"` and `minlength` checks the
    /// browser runs on the rendered form. Violations come back in document order.
    pub fn validate(&self) -> Vec<ConstraintViolation> {
        let mut violations = Vec::new();
        for field in Field::ALL {
            let value = self.get(field);
            if value.is_empty() {
                if field.required() {
                    violations.push(ConstraintViolation { field, kind: ConstraintKind::Missing });
                }
                continue;
            }
            if let Some(min) = field.min_length() {
                // minlength counts UTF-16 code units
                if value.encode_utf16().count() < min {
                    violations.push(ConstraintViolation { field, kind: ConstraintKind::TooShort { min } });
                    continue;
                }
            }
            if field == Field::Email && !is_valid_email(value.trim()) {
                violations.push(ConstraintViolation { field, kind: ConstraintKind::InvalidEmail });
            }
        }
        violations
    }

    pub fn to_payload(&self, kind: RegistrationKind) -> RegistrationPayload {
        let optional = |v: &str| if v.is_empty() { None } else { Some(v.to_string()) };
        RegistrationPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.trim().to_string(),
            phone: self.phone.clone(),
            country: self.country.clone(),
            niche: self.niche.clone(),
            instagram: optional(&self.instagram),
            tiktok: optional(&self.tiktok),
            about: self.about.clone(),
            kind,
        }
    }
}

/// JSON body of `POST /api/forms/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub niche: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    pub about: String,
    pub kind: RegistrationKind,
}

/// The "valid e-mail address" production from the HTML standard.
pub fn is_valid_email(value: &str) -> bool {
    const LOCAL_EXTRA: &str = ".!#$%&'*+/=?^_`{|}~-";

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(|c| c.is_ascii_alphanumeric() || LOCAL_EXTRA.contains(c)) {
        return false;
    }
    !domain.is_empty() && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= 63
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_match_the_site_calls_to_action() {
        assert_eq!(RegistrationKind::Creator.badge(), "Join as a Creator");
        assert_eq!(RegistrationKind::Business.badge(), "Register as a Brand");
    }

    fn filled() -> RegistrationFields {
        RegistrationFields {
            first_name: "Ada".into(),
            last_name: "Obi".into(),
            email: "ada@example.com".into(),
            phone: "+2348000000000".into(),
            country: "Nigeria".into(),
            niche: "Tech".into(),
            instagram: String::new(),
            tiktok: "https://tiktok.com/@ada".into(),
            about: "I make short films about city life.".into(),
        }
    }

    #[test]
    fn complete_fields_pass_validation() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn empty_form_reports_every_required_field_in_order() {
        let violations = RegistrationFields::default().validate();
        let fields: Vec<Field> = violations.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::FirstName,
                Field::LastName,
                Field::Email,
                Field::Phone,
                Field::Country,
                Field::Niche,
                Field::About,
            ]
        );
        assert!(violations.iter().all(|v| v.kind == ConstraintKind::Missing));
    }

    #[test]
    fn short_about_is_rejected() {
        let mut fields = filled();
        fields.about = "Too short to count".into();
        assert_eq!(
            fields.validate(),
            vec![ConstraintViolation {
                field: Field::About,
                kind: ConstraintKind::TooShort { min: ABOUT_MIN_LENGTH },
            }]
        );

        fields.about = "x".repeat(ABOUT_MIN_LENGTH);
        assert!(fields.validate().is_empty());
    }

    #[test]
    fn about_length_counts_utf16_units() {
        let mut fields = filled();
        // 10 emoji are 20 UTF-16 units but only 10 chars
        fields.about = "🎬".repeat(10);
        assert!(fields.validate().is_empty());
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(is_valid_email("a.b+c@mail.example.co"));
        assert!(is_valid_email("user@localhost"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@-bad.com"));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email("user@example..com"));

        let mut fields = filled();
        fields.email = "not-an-email".into();
        assert_eq!(fields.validate()[0].kind, ConstraintKind::InvalidEmail);
    }

    #[test]
    fn payload_uses_wire_names_and_omits_empty_socials() {
        let payload = filled().to_payload(RegistrationKind::Business);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["kind"], "business");
        assert_eq!(json["tiktok"], "https://tiktok.com/@ada");
        assert!(json.get("instagram").is_none());
    }

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("unknown"), None);
    }

    #[test]
    fn clear_empties_everything() {
        let mut fields = filled();
        fields.clear();
        assert!(fields.is_empty());
    }
}
