use serde::Deserialize;

/// Base URLs the guest-facing links are built from. The check-in URL is what
/// gets encoded into the QR token; the invitation URL is sent to the guest.
#[derive(Debug, Clone, Deserialize)]
pub struct UrlConfig {
    pub checkin_base: String,
    pub invitation_base: String,
}

impl UrlConfig {
    pub fn checkin_url(&self, unique_id: &str) -> String {
        format!("{}/scan/{}", self.checkin_base.trim_end_matches('/'), unique_id)
    }

    pub fn invitation_url(&self, unique_id: &str) -> String {
        format!(
            "{}/invitation/{}",
            self.invitation_base.trim_end_matches('/'),
            unique_id
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub urls: UrlConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:wedding.db".into());
        let urls = UrlConfig {
            checkin_base: std::env::var("CHECKIN_BASE_URL")
                .unwrap_or_else(|_| "https://your-event-checkin.com".into()),
            invitation_base: std::env::var("INVITATION_BASE_URL")
                .unwrap_or_else(|_| "https://your-invitation-web.com".into()),
        };
        Ok(Self { database_url, urls })
    }
}
