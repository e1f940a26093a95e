//! Full HTML documents composed from the individual views.

use maud::{html, Markup, DOCTYPE};
use warbler_social::{Message, SessionContext, User};

use crate::card::user_card;
use crate::controls::FollowControl;
use crate::message::{format_timestamp, message_list};
use crate::stats::user_stats;

/// Which side of the follow graph a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Following,
    Followers,
}

impl RelationKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Following => "Following",
            Self::Followers => "Followers",
        }
    }
}

/// Document shell with the navigation bar.
pub fn layout(title: &str, session: &SessionContext, query: Option<&str>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Warbler" }
                link rel="stylesheet" href="/static/stylesheets/style.css";
                link rel="icon" type="image/svg+xml" href="/static/favicon.svg";
            }
            body {
                nav class="navbar navbar-expand" {
                    div class="container-fluid" {
                        a href="/" class="navbar-brand" {
                            img src="/static/images/warbler-logo.svg" alt="logo";
                            span { "Warbler" }
                        }
                        form class="navbar-form navbar-right" action="/users" method="GET" {
                            input name="q" class="form-control" placeholder="Search Warbler"
                                value=(query.unwrap_or_default());
                            button class="btn btn-default" { "Search" }
                        }
                        ul class="nav navbar-nav navbar-right" {
                            @match session.viewer_id() {
                                Some(id) => {
                                    li { a href=(format!("/users/{id}")) { "Profile" } }
                                    li { a href="/logout" { "Log out" } }
                                }
                                None => {
                                    li { a href="/signup" { "Sign up" } }
                                    li { a href="/login" { "Log in" } }
                                }
                            }
                        }
                    }
                }
                div class="container" {
                    (body)
                }
            }
        }
    }
}

/// Grid of user cards, optionally narrowed by a search query.
pub fn user_directory(users: &[&User], query: Option<&str>, session: &SessionContext) -> Markup {
    let body = html! {
        div class="row justify-content-end" {
            div class="col-sm-9" {
                div class="row" {
                    @if users.is_empty() {
                        h3 class="empty-listing" { "Sorry, no users found" }
                    } @else {
                        @for user in users {
                            (user_card(user, session))
                        }
                    }
                }
            }
        }
    };

    layout("Users", session, query, body)
}

/// Banner, avatar, handle, bio, location and counters for a user. The follow
/// toggle appears for signed-in viewers other than the user.
fn profile_header(user: &User, session: &SessionContext) -> Markup {
    let follow = if session.is(user.id) {
        None
    } else {
        FollowControl::resolve(user, session)
    };

    html! {
        div id="warbler-hero" class="full-width" {
            img src=(user.header_image_url) alt="" class="profile-hero";
        }
        img src=(user.image_url) alt=(format!("Image for {}", user.username)) id="profile-avatar";
        div class="row full-width" {
            div class="container" {
                div class="row justify-content-end" {
                    div class="col-9" {
                        (user_stats(user, true))
                        @if let Some(control) = follow {
                            div class="ml-auto" { (control) }
                        }
                    }
                }
            }
        }
        div class="col-sm-3" id="profile-details" {
            h4 id="sidebar-username" { "@" (user.username) }
            @if let Some(bio) = user.bio() {
                p class="user-bio" { (bio) }
            }
            @if let Some(location) = user.location() {
                p class="user-location" {
                    span class="fa fa-map-marker" {}
                    " " (location)
                }
            }
        }
    }
}

/// A user's profile with their messages, newest first.
pub fn profile(user: &User, messages: &[&Message], session: &SessionContext) -> Markup {
    let authored: Vec<(&Message, &User)> = messages.iter().map(|m| (*m, user)).collect();

    let body = html! {
        (profile_header(user, session))
        div class="col-sm-6" {
            (message_list(&authored, session))
        }
    };

    layout(&format!("@{}", user.username), session, None, body)
}

/// Who a user follows, or who follows them.
pub fn relation_listing(
    user: &User,
    kind: RelationKind,
    users: &[&User],
    session: &SessionContext,
) -> Markup {
    let body = html! {
        (profile_header(user, session))
        div class="col-sm-9" {
            h3 class="listing-title" { (kind.title()) }
            div class="row" {
                @if users.is_empty() {
                    p class="text-muted empty-listing" { "Nobody here yet." }
                } @else {
                    @for other in users {
                        (user_card(other, session))
                    }
                }
            }
        }
    };

    layout(
        &format!("@{} {}", user.username, kind.title().to_lowercase()),
        session,
        None,
        body,
    )
}

/// Messages a user has liked, each paired with its author.
pub fn likes_listing(
    user: &User,
    liked: &[(&Message, &User)],
    session: &SessionContext,
) -> Markup {
    let body = html! {
        (profile_header(user, session))
        div class="col-sm-6" {
            h3 class="listing-title" { "Likes" }
            (message_list(liked, session))
        }
    };

    layout(&format!("@{} likes", user.username), session, None, body)
}

/// One message on its own page. The author gets a delete form; other
/// signed-in viewers see the author's card with its follow toggle.
pub fn message_detail(message: &Message, author: &User, session: &SessionContext) -> Markup {
    let is_author = session.is(author.id);

    let body = html! {
        div class="bg" {}
        div class="row justify-content-center" {
            div class="col-md-6" {
                ul class="list-group no-hover" id="messages" {
                    li class="list-group-item" {
                        a href=(author.path()) {
                            img src=(author.image_url)
                                alt=(format!("Image for {}", author.username))
                                class="timeline-image";
                        }
                        div class="message-area" {
                            div class="message-heading" {
                                a href=(author.path()) { "@" (author.username) }
                                @if is_author {
                                    form method="POST" action=(format!("/messages/{}/delete", message.id)) {
                                        button class="btn btn-outline-danger" { "Delete" }
                                    }
                                }
                            }
                            p class="single-message" { (message.text) }
                            span class="text-muted" { (format_timestamp(&message.timestamp)) }
                        }
                    }
                }
            }
            @if session.is_signed_in() && !is_author {
                (user_card(author, session))
            }
        }
    };

    layout(&format!("@{}", author.username), session, None, body)
}

/// Minimal page for 4xx/5xx responses.
pub fn error_page(status: u16, message: &str, session: &SessionContext) -> Markup {
    let body = html! {
        div class="error-page" {
            h1 { (status) }
            p { (message) }
            a href="/" { "Back home" }
        }
    };

    layout(&status.to_string(), session, None, body)
}
