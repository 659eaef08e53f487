use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use serde::Deserialize;

#[derive(Deserialize)]
pub struct Site {
    pub owner: String,
    pub tagline: String,
    pub activity_start_year: i32,
}

#[derive(Deserialize)]
pub struct Paths {
    pub template_dir: PathBuf,
    pub public_dir: PathBuf,
    pub posts_dir: PathBuf,
}

#[derive(Deserialize)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct RssFeed {
    pub title: String,
    pub site_url: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct Config {
    pub site: Site,
    pub paths: Paths,
    pub server: Server,
    pub log: Option<Log>,
    pub rss_feed: Option<RssFeed>,
}

fn parse_path(path: PathBuf) -> PathBuf {
    if path.starts_with("${exe_dir}") {
        let cur_exe = env::current_exe().unwrap();
        let exe_dir = cur_exe.parent().unwrap().to_str().unwrap();
        let str_path = path.to_str().unwrap();
        PathBuf::from(str_path.replace("${exe_dir}", exe_dir))
    } else {
        path
    }
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.to_str().unwrap(), e))),
    };

    let mut cfg: Config = match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        template_dir: parse_path(cfg.paths.template_dir),
        public_dir: parse_path(cfg.paths.public_dir),
        posts_dir: parse_path(cfg.paths.posts_dir),
    };

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG_DATA: &str = r##"
[site]
owner = "Sam Developer"
tagline = "Software Engineer | Frontend Developer"
activity_start_year = 2016

[paths]
template_dir = "site/templates"
public_dir = "site/public"
posts_dir = "content"

[server]
address = "127.0.0.1"
port = 8080

[log]
level = "Info"
log_to_console = true

[rss_feed]
title = "Sam Developer's blog"
site_url = "https://example.com"
description = "Posts about building software"
"##;

    #[test]
    fn test_parse_config() {
        let cfg: Config = toml::from_str(CONFIG_DATA).unwrap();
        assert_eq!(cfg.site.owner, "Sam Developer");
        assert_eq!(cfg.site.activity_start_year, 2016);
        assert_eq!(cfg.paths.posts_dir, PathBuf::from("content"));
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.log.is_some());
        let rss = cfg.rss_feed.unwrap();
        assert_eq!(rss.site_url, "https://example.com");
    }

    #[test]
    fn test_optional_sections_absent() {
        let cfg_data = r##"
[site]
owner = "Sam Developer"
tagline = "Software Engineer"
activity_start_year = 2016

[paths]
template_dir = "site/templates"
public_dir = "site/public"
posts_dir = "content"

[server]
address = "0.0.0.0"
port = 9000
"##;
        let cfg: Config = toml::from_str(cfg_data).unwrap();
        assert!(cfg.log.is_none());
        assert!(cfg.rss_feed.is_none());
    }
}
