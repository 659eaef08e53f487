use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fs, io};

use chrono::{Datelike, Utc};

use crate::config::{Config, RssFeed};
use crate::content::markdown::render_markdown;
use crate::content::{latest, sorted_summaries};
use crate::store::PostStore;
use crate::view::home_renderer::HomeRenderer;
use crate::view::list_renderer::ListRenderer;
use crate::view::post_renderer::PostRenderer;
use crate::view::rss_renderer::RssChannel;

pub const NOT_FOUND_FALLBACK: &str = r##"<!DOCTYPE html>
<html><head><title>Not found</title></head>
<body><h1>404</h1><p>This page does not exist.</p><p><a href="/">Back to home</a></p></body></html>
"##;

pub fn read_template(tpl_dir: &PathBuf, file_name: &str) -> io::Result<String> {
    let full_path = tpl_dir.join(file_name);
    match fs::read_to_string(&full_path) {
        Ok(src) => Ok(src),
        // A missing template is a deployment defect, not a missing page.
        Err(e) => Err(io::Error::new(
            ErrorKind::InvalidInput, format!("Error reading template {}: {}", full_path.to_str().unwrap(), e))),
    }
}

pub fn render_home_page(config: &Config, store: &PostStore) -> io::Result<String> {
    let posts = store.load_all()?;
    let summaries = sorted_summaries(&posts);

    let template_src = read_template(&config.paths.template_dir, "home.tpl")?;
    let renderer = HomeRenderer::new(&template_src)?;

    let years_active = (Utc::now().year() - config.site.activity_start_year) as i64;
    Ok(renderer.render(&config.site, years_active, summaries.len(), latest(&summaries)))
}

pub fn render_list_page(config: &Config, store: &PostStore) -> io::Result<String> {
    let posts = store.load_all()?;
    let summaries = sorted_summaries(&posts);

    let template_src = read_template(&config.paths.template_dir, "postlist.tpl")?;
    let renderer = ListRenderer::new(&template_src)?;
    Ok(renderer.render(&summaries))
}

pub fn render_post_page(config: &Config, store: &PostStore, slug: &str) -> io::Result<String> {
    let post = store.load(slug)?;
    let rendered_body = render_markdown(&post.body)?;

    let template_src = read_template(&config.paths.template_dir, "view.tpl")?;
    let renderer = PostRenderer::new(&template_src)?;
    Ok(renderer.render(&post, &rendered_body))
}

pub fn render_not_found_page(config: &Config) -> String {
    read_template(&config.paths.template_dir, "notfound.tpl")
        .unwrap_or_else(|_| NOT_FOUND_FALLBACK.to_string())
}

pub fn render_feed(feed: &RssFeed, store: &PostStore) -> io::Result<Vec<u8>> {
    let posts = store.load_all()?;
    let summaries = sorted_summaries(&posts);

    let channel = RssChannel {
        ch_title: feed.title.as_str(),
        ch_link: feed.site_url.as_str(),
        ch_desc: feed.description.as_str(),
    };

    channel.render(&summaries)
        .map_err(|e| io::Error::new(ErrorKind::InvalidData, format!("Error writing feed: {}", e)))
}
