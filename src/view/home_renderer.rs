use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::config::Site;
use crate::content::PostSummary;

#[derive(ramhorns::Content)]
struct HomePage<'a> {
    owner: &'a str,
    tagline: &'a str,
    years_active: i64,
    post_count: i64,
    latest: Option<LatestPost>,
}

#[derive(ramhorns::Content)]
struct LatestPost {
    link: String,
    title: String,
    date: String,
    description: String,
}

pub struct HomeRenderer<'a> {
    pub template: Template<'a>,
}

impl HomeRenderer<'_> {
    pub fn new(home_tpl_src: &str) -> io::Result<HomeRenderer> {
        let template = match Template::new(home_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing home template: {}", e)));
            }
        };

        Ok(HomeRenderer {
            template,
        })
    }

    pub fn render(&self, site: &Site, years_active: i64, post_count: usize, latest: Option<&PostSummary>) -> String {
        let latest = latest.map(|summary| LatestPost {
            link: format!("/blog/{}", summary.slug),
            title: summary.title.clone(),
            date: summary.date.clone(),
            description: summary.description.clone(),
        });

        self.template.render(&HomePage {
            owner: site.owner.as_str(),
            tagline: site.tagline.as_str(),
            years_active,
            post_count: post_count as i64,
            latest,
        })
    }
}
