use std::io;
use std::io::ErrorKind;

use markdown::Options;

/// Markdown to HTML, GFM flavor. The body is authored by the site owner,
/// so the output is embedded without a sanitization pass.
pub fn render_markdown(md_text: &str) -> io::Result<String> {
    match markdown::to_html_with_options(md_text, &Options::gfm()) {
        Ok(x) => Ok(x),
        Err(e) => Err(io::Error::new(ErrorKind::InvalidInput, e.reason.as_str())),
    }
}
