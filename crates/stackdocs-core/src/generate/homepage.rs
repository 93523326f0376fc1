//! Homepage: the project README republished as the site landing page

use super::{Generator, GeneratorContext, GeneratorError};
use crate::render::Frontmatter;
use regex::Regex;
use std::fs;
use std::sync::OnceLock;
use tracing::warn;

static CONTENT_LINK_REGEX: OnceLock<Regex> = OnceLock::new();
static MARKDOWN_LINK_REGEX: OnceLock<Regex> = OnceLock::new();

const WEIGHT: u32 = 50;

pub struct HomepageGenerator;

impl Generator for HomepageGenerator {
    fn name(&self) -> &'static str {
        "homepage"
    }

    fn generate(&self, ctx: &GeneratorContext<'_>) -> Result<Option<String>, GeneratorError> {
        let path = &ctx.config.readme_path;
        if !path.exists() {
            warn!(path = %path.display(), "README not found, skipping homepage");
            return Ok(None);
        }

        let readme = fs::read_to_string(path).map_err(|source| GeneratorError::Io {
            path: path.clone(),
            source,
        })?;

        let body = rewrite_links(trim_to_heading(&readme), &ctx.config.site.repository_url);

        let frontmatter = Frontmatter::new(
            &ctx.config.site.title,
            &ctx.config.site.description,
            &ctx.config.site.lead,
            WEIGHT,
        );
        let page = ctx.renderer.frame(&frontmatter, body.trim())?;
        Ok(Some(page))
    }
}

/// Drop any badge or prose lines before the README's first top-level
/// heading; the heading itself and everything after it stay in the
/// body. Only a `# ` at the start of a line counts.
fn trim_to_heading(readme: &str) -> &str {
    let mut offset = 0;
    for line in readme.split_inclusive('\n') {
        if line.starts_with("# ") {
            return &readme[offset..];
        }
        offset += line.len();
    }
    readme
}

/// Rewrite repository-relative links for the rendered site.
///
/// Links into the content tree lose their `.md` suffix, other relative
/// markdown links become directory-style, and the LICENSE link points
/// at the repository.
fn rewrite_links(body: &str, repository_url: &str) -> String {
    let content_link =
        CONTENT_LINK_REGEX.get_or_init(|| Regex::new(r"docs/content/([^)]+)\.md").unwrap());
    let body = content_link.replace_all(body, "$1/");

    let markdown_link =
        MARKDOWN_LINK_REGEX.get_or_init(|| Regex::new(r"\]\(([^)]+)\.md\)").unwrap());
    let body = markdown_link.replace_all(&body, |caps: &regex::Captures<'_>| {
        let target = &caps[1];
        if target.starts_with("http://") || target.starts_with("https://") {
            caps[0].to_string()
        } else {
            format!("]({target}/)")
        }
    });

    let license = format!("]({repository_url}/blob/main/LICENSE)");
    body.replace("](LICENSE)", &license)
}
