use serde::Deserialize;
use spdlog::warn;

const DELIMITER: &str = "+++";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

/// Splits raw post text into its front matter and the markdown body.
///
/// The front matter is a TOML block between `+++` lines at the top of the
/// file. A file without the block, or with a block that does not parse,
/// keeps its full text as body and gets empty metadata.
pub fn split(raw: &str) -> (FrontMatter, &str) {
    let text = raw.trim_start();
    let Some(rest) = text.strip_prefix(DELIMITER) else {
        return (FrontMatter::default(), raw);
    };
    let rest = rest.trim_start_matches(['\r', '\n']);

    let (block, after) = if let Some(after) = rest.strip_prefix(DELIMITER) {
        // Empty metadata block
        ("", after)
    } else if let Some(end) = rest.find("\n+++") {
        (&rest[..end], &rest[end + 4..])
    } else {
        warn!("Front matter block is missing its closing delimiter");
        return (FrontMatter::default(), raw);
    };
    let body = after.trim_start_matches(['\r', '\n']);

    let front_matter = match toml::from_str::<FrontMatter>(block) {
        Ok(front_matter) => front_matter,
        Err(e) => {
            warn!("Ignoring unparsable front matter: {}", e);
            FrontMatter::default()
        }
    };

    (front_matter, body)
}
