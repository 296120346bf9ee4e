use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::error;

use super::templates::Template;
use crate::api::ApiClient;
use crate::api::models::{Application, CreatedApplication};
use crate::error::{IswizError, Result};

/// Outcome of the background create call, folded back into the controller
/// before the next render.
#[derive(Debug)]
pub enum SubmissionMessage {
    Completed(CreatedApplication),
    Failed(String),
}

/// Build the creation payload for the chosen template. Templates without a
/// wired-up flow are rejected here so they can never reach the API.
pub fn build_application(
    template: Template,
    name: &str,
    redirect_url: &str,
) -> Result<Application> {
    match template {
        Template::SinglePage => Ok(Application::single_page(name, redirect_url)),
        other => Err(IswizError::UnsupportedTemplate(other.title().to_string())),
    }
}

/// Run the create call off the event loop. Exactly one message is sent on
/// the returned channel; the spawned task owns the payload.
pub fn start_submission(
    client: Arc<ApiClient>,
    application: Application,
) -> mpsc::UnboundedReceiver<SubmissionMessage> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        match client.create_application(&application).await {
            Ok(created) => {
                let _ = tx.send(SubmissionMessage::Completed(created));
            }
            Err(e) => {
                error!("Create application failed: {}", e);
                let _ = tx.send(SubmissionMessage::Failed(e.to_string()));
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_builds_a_payload_from_the_answers() {
        let application =
            build_application(Template::SinglePage, "Acme", "https://acme.test/cb").unwrap();
        assert_eq!(application.name, "Acme");
        assert_eq!(
            application.inbound_protocol_configuration.oidc.callback_urls,
            vec!["https://acme.test/cb".to_string()]
        );
    }

    #[test]
    fn other_templates_are_rejected_before_any_network_call() {
        for template in Template::ALL.into_iter().filter(|t| !t.is_supported()) {
            let error =
                build_application(template, "Acme", "https://acme.test/cb").unwrap_err();
            match error {
                IswizError::UnsupportedTemplate(title) => {
                    assert_eq!(title, template.title());
                }
                other => panic!("expected UnsupportedTemplate, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn submission_reports_exactly_one_completion() {
        let client = Arc::new(ApiClient::demo());
        let application = Application::single_page("Acme", "https://acme.test/cb");

        let mut rx = start_submission(client, application);
        match rx.recv().await {
            Some(SubmissionMessage::Completed(created)) => {
                assert_eq!(created.id.as_deref(), Some("demo-application"));
            }
            other => panic!("expected Completed, got {other:?}"),
        }
        assert!(rx.recv().await.is_none());
    }
}
