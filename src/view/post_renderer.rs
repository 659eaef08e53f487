use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::content::Post;

// Fallbacks for the link-preview tags when a post carries no metadata.
const DEFAULT_OG_TITLE: &str = "Blog Post";

#[derive(ramhorns::Content)]
struct ViewItem<'a> {
    post_title: &'a str,
    post_date: &'a str,
    post_description: &'a str,
    post_content: &'a str,
    og_title: &'a str,
    og_description: &'a str,
}

pub struct PostRenderer<'a> {
    pub template: Template<'a>,
}

impl PostRenderer<'_> {
    pub fn new(view_tpl_src: &str) -> io::Result<PostRenderer> {
        let template = match Template::new(view_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing post view template: {}", e)));
            }
        };

        Ok(PostRenderer {
            template,
        })
    }

    pub fn render(&self, post: &Post, rendered_body: &str) -> String {
        let title = post.front_matter.title.as_deref().unwrap_or("");
        let date = post.front_matter.date.as_deref().unwrap_or("");
        let description = post.front_matter.description.as_deref().unwrap_or("");

        self.template.render(&ViewItem {
            post_title: title,
            post_date: date,
            post_description: description,
            post_content: rendered_body,
            og_title: post.front_matter.title.as_deref().unwrap_or(DEFAULT_OG_TITLE),
            og_description: description,
        })
    }
}
