use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::assistant::{AnswerService, AssistantError};
use crate::web::models::{ChatbotRequest, ChatbotResponse};

/// Reaches the `/api/chatbot` endpoint over HTTP, the way the widget does
/// from the browser.
pub struct RemoteAnswerService {
    endpoint: String,
    client: Client,
}

impl RemoteAnswerService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl AnswerService for RemoteAnswerService {
    async fn ask(&self, query: &str) -> Result<String, AssistantError> {
        debug!("POST {} query={}", self.endpoint, query);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatbotRequest {
                query: query.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatbotResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Malformed(e.to_string()))?;
        Ok(body.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::ServerHandle;
    use actix_web::http::StatusCode;
    use actix_web::{web, App, HttpResponse, HttpServer};

    // Stand-in for /api/chatbot: one route per failure mode
    fn chatbot_server() -> (String, ServerHandle) {
        let server = HttpServer::new(|| {
            App::new()
                .route(
                    "/ok",
                    web::post().to(|| async {
                        HttpResponse::Ok().json(ChatbotResponse {
                            answer: "Hospet Rd, Koppal.".to_string(),
                        })
                    }),
                )
                .route(
                    "/down",
                    web::post().to(|| async {
                        HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR).body("boom")
                    }),
                )
                .route(
                    "/junk",
                    web::post().to(|| async { HttpResponse::Ok().body("<html>oops</html>") }),
                )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        (format!("http://{}", addr), handle)
    }

    #[actix_web::test]
    async fn maps_responses_to_answers_and_errors() {
        let (base, handle) = chatbot_server();

        let ok = RemoteAnswerService::new(format!("{}/ok", base))
            .ask("Where are you located?")
            .await;
        let down = RemoteAnswerService::new(format!("{}/down", base))
            .ask("Where are you located?")
            .await;
        let junk = RemoteAnswerService::new(format!("{}/junk", base))
            .ask("Where are you located?")
            .await;
        handle.stop(false).await;

        assert_eq!(ok.unwrap(), "Hospet Rd, Koppal.");
        match down {
            Err(AssistantError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(junk, Err(AssistantError::Malformed(_))));
    }

    #[actix_web::test]
    async fn unreachable_endpoint_maps_to_transport() {
        // nothing listens on port 1
        let result = RemoteAnswerService::new("http://127.0.0.1:1/api/chatbot")
            .ask("hello")
            .await;

        assert!(matches!(result, Err(AssistantError::Transport(_))));
    }
}
