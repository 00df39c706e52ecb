//! Reachability error strings to display labels.
//!
//! The health checker stores whatever the fetch layer or upstream proxy
//! reported: TLS error text, or a bare Cloudflare status code (521/522 origin
//! down, 526 invalid certificate).

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use crate::util::i18n::{Key, Locale};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthLabel<'a> {
    CertificateExpired,
    Unreachable,
    Raw(&'a str),
}

pub fn classify(health: &str) -> HealthLabel<'_> {
    if health == "certificate has expired" || health == "526" {
        HealthLabel::CertificateExpired
    } else if health.contains("Unable to connect") || health == "521" || health == "522" {
        HealthLabel::Unreachable
    } else {
        HealthLabel::Raw(health)
    }
}

/// Human-readable label for a non-empty health string.
pub fn humanize(locale: Locale, health: &str) -> String {
    match classify(health) {
        HealthLabel::CertificateExpired => locale.t(Key::CertificateExpired).to_owned(),
        HealthLabel::Unreachable => locale.t(Key::Unreachable).to_owned(),
        HealthLabel::Raw(raw) => raw.to_owned(),
    }
}
