use maud::{html, Markup};
use warbler_social::{SessionContext, User};

use crate::controls::FollowControl;

/// Summary card for `subject`: header image, avatar, handle, bio, and a
/// follow toggle for signed-in viewers.
pub fn user_card(subject: &User, session: &SessionContext) -> Markup {
    let follow = FollowControl::resolve(subject, session);

    html! {
        div class="col-lg-4 col-md-6 col-12" {
            div class="card user-card" {
                div class="card-inner" {
                    div class="image-wrapper" {
                        img src=(subject.header_image_url) alt="" class="card-hero";
                    }
                    div class="card-contents" {
                        a href=(subject.path()) class="card-link" {
                            img src=(subject.image_url)
                                alt=(format!("Image for {}", subject.username))
                                class="card-image";
                            p { "@" (subject.username) }
                        }
                        @if let Some(control) = follow {
                            (control)
                        }
                    }
                    @if let Some(bio) = subject.bio() {
                        p class="card-bio" { (bio) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warbler_social::UserId;

    #[test]
    fn bio_is_optional() {
        let plain = User::new(UserId(1), "plain", "p@test.com");
        let chatty = User::new(UserId(2), "chatty", "c@test.com").with_bio("I talk a lot");

        let session = SessionContext::anonymous();
        assert!(!user_card(&plain, &session).into_string().contains("card-bio"));
        assert!(user_card(&chatty, &session)
            .into_string()
            .contains(r#"<p class="card-bio">I talk a lot</p>"#));
    }

    #[test]
    fn anonymous_viewer_gets_no_follow_form() {
        let subject = User::new(UserId(3), "subject", "s@test.com");
        let html = user_card(&subject, &SessionContext::anonymous()).into_string();

        assert!(html.contains("@subject"));
        assert!(!html.contains("Follow"));
    }
}
