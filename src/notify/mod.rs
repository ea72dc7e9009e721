//! Profile notification over SMTP.

use anyhow::{Error, Result, bail};
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde_json::json;

use crate::chat::prompt::{self, Prompt};
use crate::core::AppConfig;
use crate::profile::Profile;

pub const NOTIFICATION_SUBJECT: &str = "New User/Student Profile Submission";

/// Render the plain-text notification body for a validated profile.
pub fn profile_email_body(profile: &Profile) -> Result<String, Error> {
    let templates = prompt::templates();
    let body = templates.render(&Prompt::ProfileNotification.to_string(), &json!(profile))?;
    Ok(body)
}

/// Send the profile to the configured recipient over an SMTP submission
/// with STARTTLS. Missing configuration fails this step only; the caller
/// decides whether that blocks the transition to chat.
pub async fn send_profile_email(config: &AppConfig, profile: &Profile) -> Result<(), Error> {
    let (Some(sender), Some(password), Some(receiver)) = (
        &config.sender_email,
        &config.sender_password,
        &config.receiver_email,
    ) else {
        bail!(
            "SMTP is not configured: set INTAKE_SENDER_EMAIL, INTAKE_SENDER_PASSWORD, and INTAKE_RECEIVER_EMAIL"
        );
    };

    let body = profile_email_body(profile)?;
    let email = Message::builder()
        .from(sender.parse::<Mailbox>()?)
        .to(receiver.parse::<Mailbox>()?)
        .subject(NOTIFICATION_SUBJECT)
        .body(body)?;

    let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
        .port(config.smtp_port)
        .credentials(Credentials::new(sender.clone(), password.clone()))
        .build();

    mailer.send(email).await?;
    tracing::debug!("Profile notification sent to {}", receiver);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextMode;

    fn test_profile() -> Profile {
        Profile {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            contact_number: "+441234567890".to_string(),
            area_of_interest: "Data Science".to_string(),
            course: "Machine Learning".to_string(),
            training_mode: "Online".to_string(),
            contact_mode: "Email".to_string(),
        }
    }

    #[test]
    fn test_profile_email_body() {
        let body = profile_email_body(&test_profile()).unwrap();
        assert!(body.starts_with("New Student Profile Submitted:"));
        assert!(body.contains("Name: Test User"));
        assert!(body.contains("Email: test@example.com"));
        assert!(body.contains("Contact No.: +441234567890"));
        assert!(body.contains("Area of Interest: Data Science"));
        assert!(body.contains("Course: Machine Learning"));
        assert!(body.contains("Training Mode: Online"));
        assert!(body.contains("Preferred Contact Mode: Email"));
    }

    #[tokio::test]
    async fn test_send_without_configuration_fails() {
        let config = AppConfig {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            sender_email: None,
            sender_password: None,
            receiver_email: None,
            openai_api_hostname: "http://127.0.0.1:9".to_string(),
            openai_api_key: "test-api-key".to_string(),
            openai_model: "gpt-4.1-mini".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            pdf_path: None,
            website_url: None,
            system_message: "You are a helpful assistant.".to_string(),
            context_mode: ContextMode::Static,
            notify_required: false,
            history_window: 5,
        };

        let err = send_profile_email(&config, &test_profile())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("SMTP is not configured"));
    }
}
