use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::content::PostSummary;

#[derive(ramhorns::Content)]
struct ListPage {
    post_list: Vec<PostItem>,
}

#[derive(ramhorns::Content)]
struct PostItem {
    link: String,
    title: String,
    date: String,
    description: String,
}

pub struct ListRenderer<'a> {
    pub template: Template<'a>,
}

impl ListRenderer<'_> {
    pub fn new(list_tpl_src: &str) -> io::Result<ListRenderer> {
        let template = match Template::new(list_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing list template: {}", e)));
            }
        };

        Ok(ListRenderer {
            template,
        })
    }

    pub fn render(&self, summaries: &[PostSummary]) -> String {
        let mut post_list = vec![];
        for summary in summaries {
            let post_item = PostItem {
                link: format!("/blog/{}", summary.slug),
                title: summary.title.clone(),
                date: summary.date.clone(),
                description: summary.description.clone(),
            };
            post_list.push(post_item);
        }

        self.template.render(&ListPage {
            post_list,
        })
    }
}
