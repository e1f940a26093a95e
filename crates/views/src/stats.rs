use maud::{html, Markup};
use warbler_social::User;

/// Counters for a user's messages, followees, followers and, when
/// `include_likes` is set, likes. Each counter links to its listing page.
pub fn user_stats(user: &User, include_likes: bool) -> Markup {
    let base = user.path();
    let stats = user.stats;

    let mut entries = vec![
        ("Messages", base.clone(), stats.messages),
        ("Following", format!("{base}/following"), stats.following),
        ("Followers", format!("{base}/followers"), stats.followers),
    ];
    if include_likes {
        entries.push(("Likes", format!("{base}/likes"), stats.likes));
    }

    html! {
        ul class="user-stats nav nav-pills" {
            @for (label, href, count) in &entries {
                li class="stat" {
                    p class="small" { (label) }
                    h4 {
                        a class="stat-link" href=(href) { (count) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warbler_social::{UserId, UserStats};

    #[test]
    fn counts_render_inside_their_links() {
        let user = User::new(UserId(7), "counter", "c@test.com").with_stats(UserStats {
            messages: 3,
            following: 1,
            followers: 12,
            likes: 0,
        });

        let html = user_stats(&user, true).into_string();

        assert!(html.contains(r#"<a class="stat-link" href="/users/7">3</a>"#));
        assert!(html.contains(r#"<a class="stat-link" href="/users/7/following">1</a>"#));
        assert!(html.contains(r#"<a class="stat-link" href="/users/7/followers">12</a>"#));
        assert!(html.contains(r#"<a class="stat-link" href="/users/7/likes">0</a>"#));
    }
}
