use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{FileId, InputFile, InputMedia, InputMediaPhoto, MessageId, ReplyParameters};
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};

use crate::converter::LinkConverter;
use crate::markup::Markup;
use crate::platform::{IncomingMessage, ReplySink, SentMessage};
use crate::relay;
use crate::replies;

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "show what this bot does")]
    Start,
}

/// Everything a handler needs, shared across all updates.
pub struct RelayState {
    pub converter: Arc<dyn LinkConverter>,
    pub markup: Markup,
}

/// Run the Telegram dispatcher until interrupted.
pub async fn run(bot: Bot, state: Arc<RelayState>) -> Result<()> {
    info!("Starting Telegram dispatcher...");

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!("Failed to register bot commands: {}", e);
    }

    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(dptree::filter(is_relayable).endpoint(handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("bot"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

/// Text, photo and video messages go through the relay; anything else is ignored.
fn is_relayable(msg: Message) -> bool {
    msg.text().is_some() || msg.photo().is_some() || msg.video().is_some()
}

fn to_incoming(msg: &Message) -> IncomingMessage {
    IncomingMessage {
        chat_id: msg.chat.id.0,
        text: msg.text().or(msg.caption()).unwrap_or_default().to_string(),
        photo: msg
            .photo()
            .and_then(|sizes| sizes.last())
            .map(|size| size.file.id.0.clone()),
        has_video: msg.video().is_some(),
    }
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<RelayState>,
) -> Result<()> {
    match cmd {
        Command::Start => {
            info!("/start from chat {}", msg.chat.id);
            let mut req = bot.send_message(msg.chat.id, replies::welcome(state.markup));
            req.parse_mode = state.markup.parse_mode();
            req.await?;
        }
    }
    Ok(())
}

async fn handle_message(bot: Bot, msg: Message, state: Arc<RelayState>) -> Result<()> {
    let incoming = to_incoming(&msg);
    let sink = TelegramSink {
        bot,
        chat_id: msg.chat.id,
        reply_to: msg.id,
        markup: state.markup,
    };

    match relay::handle(&incoming, &sink, state.converter.as_ref(), state.markup).await {
        Ok(outcome) => {
            info!("Chat {}: {:?}", incoming.chat_id, outcome);
            Ok(())
        }
        Err(e) => {
            error!("Error handling message in chat {}: {:#}", incoming.chat_id, e);
            Err(e)
        }
    }
}

/// Replies to one user message in its chat.
pub struct TelegramSink {
    bot: Bot,
    chat_id: ChatId,
    reply_to: MessageId,
    markup: Markup,
}

#[async_trait]
impl ReplySink for TelegramSink {
    async fn reply(&self, text: &str) -> Result<SentMessage> {
        let mut req = self.bot.send_message(self.chat_id, text);
        req.parse_mode = self.markup.parse_mode();
        req.reply_parameters = Some(ReplyParameters::new(self.reply_to));
        let sent = req.await?;
        Ok(SentMessage {
            message_id: sent.id.0,
        })
    }

    async fn edit_text(&self, sent: &SentMessage, text: &str) -> Result<()> {
        let mut req = self
            .bot
            .edit_message_text(self.chat_id, MessageId(sent.message_id), text);
        req.parse_mode = self.markup.parse_mode();
        req.await?;
        Ok(())
    }

    async fn edit_photo(&self, sent: &SentMessage, photo: &str, caption: &str) -> Result<()> {
        let mut media = InputMediaPhoto::new(InputFile::file_id(FileId(photo.to_string())));
        media.caption = Some(caption.to_string());
        media.parse_mode = self.markup.parse_mode();

        let edited = self
            .bot
            .edit_message_media(
                self.chat_id,
                MessageId(sent.message_id),
                InputMedia::Photo(media),
            )
            .await;

        if let Err(e) = edited {
            // Telegram refuses to turn a text message into a media message.
            warn!(
                "Could not edit placeholder into photo ({}), sending a new one",
                e
            );
            let mut req = self
                .bot
                .send_photo(self.chat_id, InputFile::file_id(FileId(photo.to_string())));
            req.caption = Some(caption.to_string());
            req.parse_mode = self.markup.parse_mode();
            req.reply_parameters = Some(ReplyParameters::new(self.reply_to));
            req.await?;

            if let Err(e) = self
                .bot
                .delete_message(self.chat_id, MessageId(sent.message_id))
                .await
            {
                warn!("Failed to delete placeholder message: {}", e);
            }
        }

        Ok(())
    }
}
