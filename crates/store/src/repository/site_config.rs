//! Site config singleton and its image side keys.
//!
//! Inlined image data never lands in the config blob itself: the blob
//! carries a `custom-logo-*` / `custom-qr-*` token and the raw bytes go
//! under a dedicated side key. Reads resolve the indirection transparently.
//! Under quota pressure the config degrades to its text fields only.

use tracing::warn;

use crate::error::StoreError;
use crate::keys;
use crate::kv::{KvError, KvStore};
use crate::models::site::{CUSTOM_LOGO_PREFIX, CUSTOM_QR_PREFIX, StoredSiteConfig};
use crate::models::{SiteConfig, SiteConfigPatch};
use crate::policy::is_inline_image;

use super::Repository;

impl<S: KvStore> Repository<S> {
    /// The site configuration, with image tokens resolved back to their
    /// side-key payloads.
    ///
    /// Absent or corrupt config reads as the default.
    #[must_use]
    pub fn site_config(&self) -> SiteConfig {
        let Some(raw) = self.store().get(keys::SITE_CONFIG) else {
            return SiteConfig::default();
        };
        let stored: StoredSiteConfig = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(err) => {
                warn!(%err, "corrupt site config treated as default");
                return SiteConfig::default();
            }
        };

        let defaults = SiteConfig::default();
        let logo_url = stored.logo_url.map_or(defaults.logo_url, |logo| {
            self.resolve_image_token(&logo, CUSTOM_LOGO_PREFIX, keys::SITE_LOGO_IMAGE)
        });
        let qr_code_url = stored.qr_code_url.map(|qr| {
            self.resolve_image_token(&qr, CUSTOM_QR_PREFIX, keys::SITE_QR_IMAGE)
        });

        SiteConfig {
            site_name: stored.site_name,
            logo_url,
            contact_email: stored.contact_email,
            contact_phone: stored.contact_phone,
            qr_code_url,
        }
    }

    /// Apply a patch to the site config and persist it.
    ///
    /// Inline image payloads are moved to their side keys. When the write
    /// is refused for quota, the config is retried with its text fields
    /// only (site name, contact email, contact phone).
    ///
    /// # Errors
    ///
    /// Returns a storage error if even the minimal config cannot be
    /// persisted.
    pub fn update_site_config(
        &mut self,
        patch: SiteConfigPatch,
    ) -> Result<SiteConfig, StoreError> {
        let mut config = self.site_config();
        patch.apply(&mut config);

        match self.store_full_config(&config) {
            Ok(()) => Ok(config),
            Err(StoreError::Storage(KvError::QuotaExceeded { key, .. })) => {
                warn!(key, "site config write over quota, storing minimal config");
                self.store_minimal_config(&config)?;
                Ok(config)
            }
            Err(err) => Err(err),
        }
    }

    fn resolve_image_token(&self, value: &str, prefix: &str, side_key: &str) -> String {
        if value.starts_with(prefix) {
            // A missing side key leaves the token visible rather than
            // inventing a default.
            self.store().get(side_key).unwrap_or_else(|| value.to_owned())
        } else {
            value.to_owned()
        }
    }

    fn store_full_config(&mut self, config: &SiteConfig) -> Result<(), StoreError> {
        let logo_inline = is_inline_image(&config.logo_url);
        let qr_inline = config
            .qr_code_url
            .as_deref()
            .is_some_and(is_inline_image);

        let stored = StoredSiteConfig {
            site_name: config.site_name.clone(),
            logo_url: Some(if logo_inline {
                format!("{CUSTOM_LOGO_PREFIX}{}", self.ids().next_token())
            } else {
                config.logo_url.clone()
            }),
            contact_email: config.contact_email.clone(),
            contact_phone: config.contact_phone.clone(),
            qr_code_url: config.qr_code_url.as_ref().map(|qr| {
                if qr_inline {
                    format!("{CUSTOM_QR_PREFIX}{}", self.ids().next_token())
                } else {
                    qr.clone()
                }
            }),
        };

        let raw = serde_json::to_string(&stored)?;
        self.store_mut().set(keys::SITE_CONFIG, &raw)?;

        if logo_inline {
            let logo = config.logo_url.clone();
            self.store_mut().set(keys::SITE_LOGO_IMAGE, &logo)?;
        }
        if qr_inline
            && let Some(qr) = config.qr_code_url.clone()
        {
            self.store_mut().set(keys::SITE_QR_IMAGE, &qr)?;
        }
        Ok(())
    }

    fn store_minimal_config(&mut self, config: &SiteConfig) -> Result<(), StoreError> {
        let minimal = StoredSiteConfig {
            site_name: config.site_name.clone(),
            logo_url: None,
            contact_email: config.contact_email.clone(),
            contact_phone: config.contact_phone.clone(),
            qr_code_url: None,
        };
        let raw = serde_json::to_string(&minimal)?;
        self.store_mut().set(keys::SITE_CONFIG, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;

    #[test]
    fn test_defaults_when_never_configured() {
        let repo = Repository::open(MemoryKv::new()).unwrap();
        let config = repo.site_config();
        assert_eq!(config.site_name, "Digital Store");
    }

    #[test]
    fn test_update_text_fields() {
        let mut repo = Repository::open(MemoryKv::new()).unwrap();
        let updated = repo
            .update_site_config(SiteConfigPatch {
                site_name: Some("Topup Bazaar".to_owned()),
                ..SiteConfigPatch::default()
            })
            .unwrap();
        assert_eq!(updated.site_name, "Topup Bazaar");
        // Untouched fields keep their defaults.
        assert_eq!(updated.contact_email, "support@digitalstore.com");
        assert_eq!(repo.site_config().site_name, "Topup Bazaar");
    }

    #[test]
    fn test_inline_logo_goes_to_side_key() {
        let mut repo = Repository::open(MemoryKv::new()).unwrap();
        let payload = "data:image/png;base64,logobytes".to_owned();
        repo.update_site_config(SiteConfigPatch {
            logo_url: Some(payload.clone()),
            ..SiteConfigPatch::default()
        })
        .unwrap();

        // The blob holds a token, the side key holds the payload, and the
        // read path stitches them back together.
        let raw_blob = repo.store().get(keys::SITE_CONFIG).unwrap();
        assert!(raw_blob.contains(CUSTOM_LOGO_PREFIX));
        assert!(!raw_blob.contains("logobytes"));
        assert_eq!(
            repo.store().get(keys::SITE_LOGO_IMAGE).as_deref(),
            Some(payload.as_str())
        );
        assert_eq!(repo.site_config().logo_url, payload);
    }

    #[test]
    fn test_inline_qr_goes_to_side_key() {
        let mut repo = Repository::open(MemoryKv::new()).unwrap();
        let payload = "data:image/png;base64,qrbytes".to_owned();
        repo.update_site_config(SiteConfigPatch {
            qr_code_url: Some(payload.clone()),
            ..SiteConfigPatch::default()
        })
        .unwrap();

        assert_eq!(repo.site_config().qr_code_url.as_deref(), Some(payload.as_str()));
    }

    #[test]
    fn test_quota_failure_degrades_to_minimal_config() {
        // Quota sized so the seeded collections fit but an image-bearing
        // config blob does not.
        let kv = MemoryKv::with_quota(4 * 1024);
        let mut repo = Repository::open(kv).unwrap();

        let updated = repo
            .update_site_config(SiteConfigPatch {
                site_name: Some("Topup Bazaar".to_owned()),
                logo_url: Some(format!(
                    "data:image/png;base64,{}",
                    "a".repeat(8 * 1024)
                )),
                ..SiteConfigPatch::default()
            })
            .unwrap();

        // The in-memory view keeps the caller's values...
        assert_eq!(updated.site_name, "Topup Bazaar");

        // ...but the stored blob fell back to text fields only.
        let raw_blob = repo.store().get(keys::SITE_CONFIG).unwrap();
        let stored: serde_json::Value = serde_json::from_str(&raw_blob).unwrap();
        assert_eq!(stored["siteName"], "Topup Bazaar");
        assert!(stored.get("logoUrl").is_none());
    }
}
