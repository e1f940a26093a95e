use chrono::{DateTime, Utc};
use maud::{html, Markup};
use warbler_social::{Message, SessionContext, User};

use crate::controls::LikeControl;

/// `DD Month YYYY`, e.g. `05 March 2024`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d %B %Y").to_string()
}

/// One message as a list item: author avatar and handle, date, body, and the
/// like toggle when someone other than the author is signed in.
pub fn message_item(message: &Message, author: &User, session: &SessionContext) -> Markup {
    let like = LikeControl::resolve(message, session);

    html! {
        li class="list-group-item" id=(format!("message-{}", message.id)) {
            a href=(message.path()) class="message-link" {}
            a href=(author.path()) {
                img src=(author.image_url) alt=(format!("Image for {}", author.username)) class="timeline-image";
            }
            div class="message-area" {
                a href=(author.path()) { "@" (author.username) }
                span class="text-muted" { (format_timestamp(&message.timestamp)) }
                p { (message.text) }
            }
            @if let Some(control) = like {
                (control)
            }
        }
    }
}

/// Messages paired with their authors, rendered as a list.
pub fn message_list(messages: &[(&Message, &User)], session: &SessionContext) -> Markup {
    html! {
        @if messages.is_empty() {
            p class="text-muted empty-listing" { "No messages yet." }
        } @else {
            ul class="list-group" id="messages" {
                @for (message, author) in messages {
                    (message_item(message, author, session))
                }
            }
        }
    }
}
