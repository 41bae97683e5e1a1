//! Typed site settings.
//!
//! The `settings` table is a flat key/value store holding site copy and
//! contact details. Rows are folded into [`SiteSettings`] at load time:
//! known keys land in named fields (falling back to the bundled company
//! copy when absent or invalid), anything else is kept in `extra`.
//! Serialization produces the flat `key -> value` object the frontend
//! consumes.

use std::collections::BTreeMap;

use serde::ser::{Serialize, Serializer};
use validator::ValidateEmail;

pub const KEY_COMPANY_NAME: &str = "company_name";
pub const KEY_COMPANY_EMAIL: &str = "company_email";
pub const KEY_COMPANY_PHONE: &str = "company_phone";
pub const KEY_COMPANY_ADDRESS: &str = "company_address";
pub const KEY_ABOUT_COMPANY: &str = "about_company";
pub const KEY_COMPANY_MISSION: &str = "company_mission";
pub const KEY_COMPANY_VISION: &str = "company_vision";
pub const KEY_SOCIAL_LINKEDIN: &str = "social_linkedin";
pub const KEY_SOCIAL_TWITTER: &str = "social_twitter";
pub const KEY_SOCIAL_FACEBOOK: &str = "social_facebook";

/// Site copy and contact details with every known key guaranteed present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
    pub company_address: String,
    pub about_company: String,
    pub company_mission: String,
    pub company_vision: String,
    pub social_linkedin: String,
    pub social_twitter: String,
    pub social_facebook: String,
    /// Stored keys without a named field, passed through untouched.
    pub extra: BTreeMap<String, String>,
}

/// A stored setting that failed validation and was replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSetting {
    pub key: String,
    pub value: String,
    pub reason: &'static str,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            company_name: "Srimitha Energy Solutions".into(),
            company_email: "info@srimitha-energy.com".into(),
            company_phone: "+91 80 1234 5678".into(),
            company_address:
                "36 Energy Park Road, Electronic City Phase 1, Bangalore, Karnataka 560100, India"
                    .into(),
            about_company: "Srimitha Energy Solutions is a premier electrical engineering firm \
                specializing in renewable energy systems, power distribution, and energy \
                efficiency solutions. Founded in 2010, we have successfully completed over 200 \
                projects across India and Southeast Asia, bringing innovative and sustainable \
                energy solutions to industries, municipalities, and communities."
                .into(),
            company_mission: "Our mission is to accelerate the global transition to sustainable \
                energy through innovative engineering solutions that are reliable, efficient, and \
                environmentally responsible. We strive to empower our clients with the knowledge \
                and technology to optimize their energy systems and reduce their environmental \
                impact."
                .into(),
            company_vision: "We envision a world powered by clean, accessible, and reliable \
                energy. Srimitha Energy Solutions aims to be at the forefront of this \
                transformation, driving innovation in electrical engineering and contributing to \
                a more sustainable future for all."
                .into(),
            social_linkedin: "https://linkedin.com/company/srimitha-energy".into(),
            social_twitter: "https://twitter.com/srimitha_energy".into(),
            social_facebook: "https://facebook.com/srimithaenergy".into(),
            extra: BTreeMap::new(),
        }
    }
}

impl SiteSettings {
    /// Fold stored `(key, value)` rows into a settings record.
    ///
    /// Returns the record plus every row that was rejected by validation.
    /// Later rows win when a key repeats.
    pub fn from_pairs<I, K, V>(pairs: I) -> (Self, Vec<RejectedSetting>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut settings = SiteSettings::default();
        let mut rejected = Vec::new();

        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();

            if let Err(reason) = validate_value(&key, &value) {
                rejected.push(RejectedSetting { key, value, reason });
                continue;
            }

            match settings.field_mut(&key) {
                Some(slot) => *slot = value,
                None => {
                    settings.extra.insert(key, value);
                }
            }
        }

        (settings, rejected)
    }

    /// Look up any setting, named or extra.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.named()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .or_else(|| self.extra.get(key).map(String::as_str))
    }

    /// The flat map served to clients.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = self.extra.clone();
        for (key, value) in self.named() {
            map.insert(key.to_string(), value.clone());
        }
        map
    }

    fn named(&self) -> [(&'static str, &String); 10] {
        [
            (KEY_COMPANY_NAME, &self.company_name),
            (KEY_COMPANY_EMAIL, &self.company_email),
            (KEY_COMPANY_PHONE, &self.company_phone),
            (KEY_COMPANY_ADDRESS, &self.company_address),
            (KEY_ABOUT_COMPANY, &self.about_company),
            (KEY_COMPANY_MISSION, &self.company_mission),
            (KEY_COMPANY_VISION, &self.company_vision),
            (KEY_SOCIAL_LINKEDIN, &self.social_linkedin),
            (KEY_SOCIAL_TWITTER, &self.social_twitter),
            (KEY_SOCIAL_FACEBOOK, &self.social_facebook),
        ]
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            KEY_COMPANY_NAME => Some(&mut self.company_name),
            KEY_COMPANY_EMAIL => Some(&mut self.company_email),
            KEY_COMPANY_PHONE => Some(&mut self.company_phone),
            KEY_COMPANY_ADDRESS => Some(&mut self.company_address),
            KEY_ABOUT_COMPANY => Some(&mut self.about_company),
            KEY_COMPANY_MISSION => Some(&mut self.company_mission),
            KEY_COMPANY_VISION => Some(&mut self.company_vision),
            KEY_SOCIAL_LINKEDIN => Some(&mut self.social_linkedin),
            KEY_SOCIAL_TWITTER => Some(&mut self.social_twitter),
            KEY_SOCIAL_FACEBOOK => Some(&mut self.social_facebook),
            _ => None,
        }
    }
}

impl Serialize for SiteSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

/// Per-key checks. Keys without a rule accept any value.
fn validate_value(key: &str, value: &str) -> Result<(), &'static str> {
    match key {
        KEY_COMPANY_EMAIL if !value.validate_email() => Err("not a valid email address"),
        KEY_SOCIAL_LINKEDIN | KEY_SOCIAL_TWITTER | KEY_SOCIAL_FACEBOOK if !is_http_url(value) => {
            Err("not an absolute http(s) URL")
        }
        KEY_COMPANY_NAME if value.trim().is_empty() => Err("must not be blank"),
        _ => Ok(()),
    }
}

fn is_http_url(value: &str) -> bool {
    ["https://", "http://"].iter().any(|scheme| {
        value
            .strip_prefix(scheme)
            .is_some_and(|rest| !rest.is_empty() && !rest.contains(char::is_whitespace))
    })
}
