//! Playground page - renders sample URLs and a srcset for one image.

use crate::builder::{blur, Operation, UrlBuilder};
use crate::error::Error;
use crate::srcset::SrcsetConfig;

/// Width range of the sample fluid srcset.
const SAMPLE_SRCSET_MIN_WIDTH: i64 = 100;
const SAMPLE_SRCSET_MAX_WIDTH: i64 = 400;

/// URLs shown on the playground page.
#[derive(Debug, Clone)]
pub struct PlaygroundPage {
    pub source: String,
    pub url_cdn: String,
    pub url_width: String,
    pub url_cover: String,
    pub url_blur: String,
    pub srcset: String,
}

impl PlaygroundPage {
    /// Build the sample URLs for `image_path`.
    pub fn build(builder: &UrlBuilder, image_path: &str) -> Result<Self, Error> {
        let width = Operation::width(400)?;
        let srcset_config = SrcsetConfig::default()
            .with_min_width(SAMPLE_SRCSET_MIN_WIDTH)
            .with_max_width(SAMPLE_SRCSET_MAX_WIDTH);

        Ok(Self {
            source: builder.source().to_string(),
            url_cdn: builder.create_url(image_path, &Operation::cdn(), &[]),
            url_width: builder.create_url(image_path, &width, &[]),
            url_cover: builder.create_url(image_path, &Operation::cover(300, 300)?, &[]),
            url_blur: builder.create_url(image_path, &width, &[blur(4)]),
            srcset: builder.create_srcset(image_path, &Operation::cdn(), &[], &srcset_config)?,
        })
    }
}

/// Escape HTML special characters to prevent XSS attacks.
fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render one labelled URL section with a preview image.
fn url_section(title: &str, url: &str, alt: &str, width: u32) -> String {
    let url = html_escape(url);
    format!(
        r#"  <section>
    <h2>{title}</h2>
    <div class="url"><code>{url}</code></div>
    <img src="{url}" alt="{alt}" width="{width}" loading="lazy" onerror="this.style.display='none'">
  </section>
"#
    )
}

/// Render the playground HTML page.
pub fn render_playground(page: &PlaygroundPage) -> String {
    let srcset = html_escape(&page.srcset);
    let url_width = html_escape(&page.url_width);

    let mut sections = String::new();
    sections.push_str(&url_section("CDN (pass-through)", &page.url_cdn, "CDN", 300));
    sections.push_str(&url_section("Width 400", &page.url_width, "Width", 400));
    sections.push_str(&url_section("Cover 300×300", &page.url_cover, "Cover", 300));
    sections.push_str(&url_section("Width 400 + blur:4", &page.url_blur, "Blur", 400));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>ImageBoss Playground</title>
  <style>
    body {{ font-family: system-ui, sans-serif; max-width: 900px; margin: 2rem auto; padding: 0 1rem; }}
    h1 {{ font-size: 1.5rem; }}
    section {{ margin: 1.5rem 0; padding: 1rem; background: #f5f5f5; border-radius: 8px; }}
    code {{ background: #eee; padding: 2px 6px; border-radius: 4px; word-break: break-all; }}
    pre {{ overflow-x: auto; font-size: 0.85rem; }}
    img {{ max-width: 100%; height: auto; border: 1px solid #ddd; border-radius: 4px; }}
    .url {{ margin: 0.5rem 0; }}
  </style>
</head>
<body>
  <h1>ImageBoss Playground</h1>
  <p>Source: <strong>{source}</strong>. Pass <code>?source=your-source</code> to see live images.</p>

{sections}
  <section>
    <h2>Srcset (fluid widths {min}–{max})</h2>
    <pre>{srcset}</pre>
    <img src="{url_width}"
         srcset="{srcset}"
         sizes="(max-width: 600px) 100vw, 400px"
         alt="Responsive" loading="lazy" onerror="this.style.display='none'">
  </section>
</body>
</html>
"#,
        source = html_escape(&page.source),
        sections = sections,
        min = SAMPLE_SRCSET_MIN_WIDTH,
        max = SAMPLE_SRCSET_MAX_WIDTH,
        srcset = srcset,
        url_width = url_width,
    )
}
