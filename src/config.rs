use crate::{error::Error, service::verification::WindowPolicy};

/// Default HTTP port, matching the port the front-end expects in development.
const DEFAULT_PORT: u16 = 3002;

/// Default maximum difference between a reported flight's duration and a corpus
/// candidate's duration for the candidate to count as a match.
pub const DEFAULT_TOLERANCE_MINUTES: i64 = 15;

// TODO: Replace with a per-request email hash lookup once identity provider
// integration lands; until then every request acts as this pinned user.
const DEFAULT_USER_EMAIL_HASH: &str =
    "1c61d3af9e95de4b161dc5c7d5d7e0cbc6de90f884defcfe6d49a5e8bce62806";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub verification_tolerance_minutes: i64,
    pub verification_window: WindowPolicy,
    pub user_email_hash: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| Error::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| Error::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("expected a port number, got {:?}", value),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let verification_tolerance_minutes =
            match std::env::var("VERIFICATION_TOLERANCE_MINUTES") {
                Ok(value) => match value.parse::<i64>() {
                    Ok(minutes) if minutes >= 0 => minutes,
                    _ => {
                        return Err(Error::InvalidEnvValue {
                            var: "VERIFICATION_TOLERANCE_MINUTES".to_string(),
                            reason: format!("expected a non-negative integer, got {:?}", value),
                        })
                    }
                },
                Err(_) => DEFAULT_TOLERANCE_MINUTES,
            };

        let verification_window = match std::env::var("VERIFICATION_WINDOW") {
            Ok(value) => match value.as_str() {
                "day" => WindowPolicy::DayBucket,
                "symmetric" => WindowPolicy::Symmetric,
                _ => {
                    return Err(Error::InvalidEnvValue {
                        var: "VERIFICATION_WINDOW".to_string(),
                        reason: format!("expected \"day\" or \"symmetric\", got {:?}", value),
                    })
                }
            },
            Err(_) => WindowPolicy::DayBucket,
        };

        let user_email_hash = std::env::var("USER_EMAIL_HASH")
            .unwrap_or_else(|_| DEFAULT_USER_EMAIL_HASH.to_string());

        Ok(Self {
            database_url,
            port,
            verification_tolerance_minutes,
            verification_window,
            user_email_hash,
        })
    }
}
