//! Site configuration and admin credential singletons.

use serde::{Deserialize, Serialize};

/// Token prefix marking a stored logo that lives under the logo side key.
pub(crate) const CUSTOM_LOGO_PREFIX: &str = "custom-logo-";
/// Token prefix marking a stored QR code under the QR side key.
pub(crate) const CUSTOM_QR_PREFIX: &str = "custom-qr-";

/// Site-wide display configuration (singleton).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Storefront name shown in the header.
    pub site_name: String,
    /// Logo reference: URL, placeholder, or inlined image data.
    pub logo_url: String,
    /// Support email shown in the footer and contact page.
    pub contact_email: String,
    /// Support phone number.
    pub contact_phone: String,
    /// Payment QR code shown on the payment page.
    pub qr_code_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Digital Store".to_owned(),
            logo_url: "/placeholder.svg?height=96&width=96".to_owned(),
            contact_email: "support@digitalstore.com".to_owned(),
            contact_phone: "+1 (123) 456-7890".to_owned(),
            qr_code_url: Some("/placeholder.svg?height=192&width=192".to_owned()),
        }
    }
}

/// Field-by-field update for the site config.
#[derive(Debug, Clone, Default)]
pub struct SiteConfigPatch {
    pub site_name: Option<String>,
    pub logo_url: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub qr_code_url: Option<String>,
}

impl SiteConfigPatch {
    pub(crate) fn apply(self, config: &mut SiteConfig) {
        if let Some(site_name) = self.site_name {
            config.site_name = site_name;
        }
        if let Some(logo_url) = self.logo_url {
            config.logo_url = logo_url;
        }
        if let Some(contact_email) = self.contact_email {
            config.contact_email = contact_email;
        }
        if let Some(contact_phone) = self.contact_phone {
            config.contact_phone = contact_phone;
        }
        if let Some(qr_code_url) = self.qr_code_url {
            config.qr_code_url = Some(qr_code_url);
        }
    }
}

/// The stored form of [`SiteConfig`].
///
/// Inline image payloads never land in this blob; they are swapped for
/// `custom-logo-*` / `custom-qr-*` tokens and stored under side keys. Under
/// quota pressure the image fields are dropped entirely (the "minimal
/// config"), so both are optional when reading back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredSiteConfig {
    pub site_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code_url: Option<String>,
}

/// Admin back-office credentials (singleton).
///
/// Stored as two separate keys; defaults apply until first configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_owned(),
            password: "admin".to_owned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_omits_image_fields() {
        let stored = StoredSiteConfig {
            site_name: "Digital Store".to_owned(),
            logo_url: None,
            contact_email: "support@digitalstore.com".to_owned(),
            contact_phone: "+1".to_owned(),
            qr_code_url: None,
        };
        let json = serde_json::to_value(&stored).unwrap();
        assert!(json.get("logoUrl").is_none());
        assert!(json.get("qrCodeUrl").is_none());
        assert!(json.get("siteName").is_some());
    }

    #[test]
    fn test_stored_config_reads_back_without_images() {
        let parsed: StoredSiteConfig = serde_json::from_str(
            r#"{"siteName":"S","contactEmail":"e","contactPhone":"p"}"#,
        )
        .unwrap();
        assert_eq!(parsed.logo_url, None);
    }
}
