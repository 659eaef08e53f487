use std::io::Cursor;

use chrono::{NaiveDate, TimeZone, Utc};
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::content::PostSummary;

/* Example
<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0">

<channel>
  <title>Sam Developer's blog</title>
  <link>https://example.com</link>
  <description>Posts about building software</description>
  <item>
    <title>Getting started with Rust</title>
    <link>https://example.com/blog/getting-started-with-rust</link>
    <description>Notes from my first months with the borrow checker</description>
  </item>
</channel>

</rss>
*/

pub struct RssChannel<'a> {
    pub ch_title: &'a str,
    pub ch_link: &'a str,
    pub ch_desc: &'a str,
}

impl<'a> RssChannel<'a> {
    pub fn render(&self, summaries: &[PostSummary]) -> quick_xml::Result<Vec<u8>> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        let decl = Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None));
        writer.write_event(decl)?;

        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        writer.write_event(Event::Start(rss))?;

        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        push_text(&mut writer, "title", self.ch_title)?;
        push_text(&mut writer, "link", self.ch_link)?;
        push_text(&mut writer, "description", self.ch_desc)?;

        for summary in summaries {
            writer.write_event(Event::Start(BytesStart::new("item")))?;

            push_text(&mut writer, "title", summary.title.as_str())?;

            let link = full_link(self.ch_link, summary.slug.as_str());
            push_text(&mut writer, "link", link.as_str())?;

            let mut guid_elem = BytesStart::new("guid");
            guid_elem.push_attribute(("isPermaLink", "true"));
            writer.write_event(Event::Start(guid_elem))?;
            writer.write_event(Event::Text(BytesText::new(link.as_str())))?;
            writer.write_event(Event::End(BytesEnd::new("guid")))?;

            push_cdata(&mut writer, "description", summary.description.as_str())?;

            // Post dates are opaque strings everywhere else. The feed is the
            // one consumer that needs a real date, so a string that does not
            // parse simply loses its pubDate.
            if let Some(pub_date) = rfc2822_date(summary.date.as_str()) {
                push_text(&mut writer, "pubDate", pub_date.as_str())?;
            }

            writer.write_event(Event::End(BytesEnd::new("item")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        Ok(writer.into_inner().into_inner())
    }
}

fn rfc2822_date(date: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let date_time = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&date_time).to_rfc2822())
}

fn full_link(base_url: &str, slug: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    format!("{}/blog/{}", base_url, slug)
}

fn push_text(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn push_cdata(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    if text.contains("]]>") {
        let new_text = text.replace("]]>", "]] >");
        writer.write_event(Event::CData(BytesCData::new(&new_text)))?;
    } else {
        writer.write_event(Event::CData(BytesCData::new(text)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str;

    use crate::content::PostSummary;

    use super::*;

    fn create_summary(id: &str, date: &str) -> PostSummary {
        PostSummary {
            slug: format!("post-{}", id),
            title: format!("title-of-post-{}", id),
            date: date.to_string(),
            description: format!("summary-of-post-{}", id),
        }
    }

    #[test]
    fn render_xml() {
        let summaries = vec![
            create_summary("1", "2024-01-02"),
            create_summary("2", "not-a-date"),
        ];

        let rss = RssChannel {
            ch_title: "my feed",
            ch_link: "https://example.com",
            ch_desc: "My blog feed",
        };
        let xml = rss.render(&summaries).unwrap();
        assert_eq!(str::from_utf8(&xml).unwrap(), EXPECTED);
    }

    const EXPECTED: &str = r##"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0"><channel><title>my feed</title><link>https://example.com</link><description>My blog feed</description><item><title>title-of-post-1</title><link>https://example.com/blog/post-1</link><guid isPermaLink="true">https://example.com/blog/post-1</guid><description><![CDATA[summary-of-post-1]]></description><pubDate>Tue, 2 Jan 2024 00:00:00 +0000</pubDate></item><item><title>title-of-post-2</title><link>https://example.com/blog/post-2</link><guid isPermaLink="true">https://example.com/blog/post-2</guid><description><![CDATA[summary-of-post-2]]></description></item></channel></rss>"##;

    #[test]
    fn test_full_link_trims_trailing_slash() {
        assert_eq!(full_link("https://example.com/", "a-post"), "https://example.com/blog/a-post");
        assert_eq!(full_link("https://example.com", "a-post"), "https://example.com/blog/a-post");
    }

    #[test]
    fn test_rfc2822_date() {
        assert_eq!(rfc2822_date("2024-01-02").unwrap(), "Tue, 2 Jan 2024 00:00:00 +0000");
        assert!(rfc2822_date("January 2nd").is_none());
        assert!(rfc2822_date("").is_none());
    }
}
