use anyhow::Result;
use tracing::info;

use crate::composer::compose;
use crate::converter::{convert_all, LinkConverter};
use crate::links::{extract_links, strip_internal_links};
use crate::markup::Markup;
use crate::platform::{IncomingMessage, ReplySink};
use crate::replies;

/// How a handled message ended, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    VideoRejected,
    NoLinks,
    ConversionFailed,
    Converted { links: usize, converted: usize },
}

/// Run the link conversion pipeline for one incoming message.
pub async fn handle(
    msg: &IncomingMessage,
    sink: &dyn ReplySink,
    converter: &dyn LinkConverter,
    markup: Markup,
) -> Result<Outcome> {
    let text = strip_internal_links(&msg.text);

    if msg.has_video {
        sink.reply(&replies::video_not_supported(markup)).await?;
        return Ok(Outcome::VideoRejected);
    }

    let links = extract_links(&text);
    info!("Message in chat {} with {} link(s)", msg.chat_id, links.len());

    if links.is_empty() {
        sink.reply(&replies::no_links(markup)).await?;
        return Ok(Outcome::NoLinks);
    }

    let placeholder = sink.reply(&replies::placeholder(markup)).await?;

    let converted = convert_all(converter, &links).await;
    if converted.is_empty() {
        sink.edit_text(&placeholder, &replies::conversion_failed(markup))
            .await?;
        return Ok(Outcome::ConversionFailed);
    }

    let final_text = replies::converted(markup, &compose(&text, &converted));
    match &msg.photo {
        Some(photo) => sink.edit_photo(&placeholder, photo, &final_text).await?,
        None => sink.edit_text(&placeholder, &final_text).await?,
    }

    Ok(Outcome::Converted {
        links: links.len(),
        converted: converted.len(),
    })
}
