//! Terminal rendition of the assistant widget.
//!
//! Type a question and press Enter to send it. While the transcript holds
//! only the greeting, entering `1`-`4` copies a suggested question into the
//! draft; an empty line then sends the draft. `/quit` closes the widget.

use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use sai_motors::assistant::{
    AssistantController, ControllerConfig, Message, Rejection, SendOutcome, Sender,
};
use sai_motors::config::Settings;
use sai_motors::web::client::RemoteAnswerService;

fn render(message: &Message) {
    let who = match message.sender() {
        Sender::User => "you",
        Sender::Assistant => "assistant",
    };
    for line in message.lines() {
        println!("[{}] {}", who, line);
    }
}

fn render_quick_replies(controller: &AssistantController) {
    let replies = controller.quick_replies();
    if replies.is_empty() {
        return;
    }
    println!("Or ask one of these:");
    for (i, question) in replies.iter().enumerate() {
        println!("  {}. {}", i + 1, question);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::from_env();
    info!("Widget talking to {}", settings.chatbot_url);

    let service = Arc::new(RemoteAnswerService::new(settings.chatbot_url.clone()));
    let controller = Arc::new(AssistantController::with_config(
        service,
        ControllerConfig {
            timeout: Some(settings.timeout),
        },
    ));

    for message in controller.transcript() {
        render(&message);
    }
    render_quick_replies(&controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();

        if input == "/quit" {
            break;
        }

        if let Ok(choice) = input.parse::<usize>() {
            if choice >= 1 && controller.select_quick_reply(choice - 1) {
                println!("(draft) {}", controller.draft());
                continue;
            }
        }

        if controller.is_pending() {
            println!("(still waiting for the assistant)");
            continue;
        }

        if !input.is_empty() {
            controller.set_draft(line.clone());
        }

        let draft = controller.draft();
        let widget = Arc::clone(&controller);
        tokio::spawn(async move {
            match widget.send(&draft).await {
                SendOutcome::Answered(reply) | SendOutcome::FellBack(reply) => render(&reply),
                SendOutcome::Rejected(Rejection::Empty) => {}
                SendOutcome::Rejected(Rejection::Busy) => {
                    println!("(still waiting for the assistant)")
                }
            }
        });
    }

    Ok(())
}
