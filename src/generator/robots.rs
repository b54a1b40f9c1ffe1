//! robots.txt `Sitemap:` directives.

/// Compose robots.txt content referencing every sitemap URL.
///
/// Without existing content a minimal allow-all block is synthesized. With
/// existing content, missing `Sitemap:` lines are appended at the end; lines
/// already present (compared after trimming) are left alone, and nothing is
/// removed or reordered.
pub fn compose_robots(existing: Option<&str>, sitemap_urls: &[String]) -> String {
    let directives = sitemap_urls.iter().map(|url| format!("Sitemap: {url}"));

    let existing = existing.filter(|s| !s.trim().is_empty());
    let Some(existing) = existing else {
        let mut out = String::from("User-agent: *\nAllow: /\n");
        for line in directives {
            out.push_str(&line);
            out.push('\n');
        }
        return out;
    };

    let mut out = existing.to_string();
    let mut seen: Vec<String> = existing.lines().map(|l| l.trim().to_string()).collect();
    for line in directives {
        if seen.contains(&line) {
            continue;
        }
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&line);
        out.push('\n');
        seen.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_synthesized_when_absent() {
        let out = compose_robots(None, &urls(&["https://example.com/sitemap.xml"]));
        assert_eq!(
            out,
            "User-agent: *\nAllow: /\nSitemap: https://example.com/sitemap.xml\n"
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_absent() {
        let out = compose_robots(Some("  \n"), &urls(&["https://example.com/sitemap.xml"]));
        assert!(out.starts_with("User-agent: *\nAllow: /\n"));
    }

    #[test]
    fn test_appends_to_existing() {
        let out = compose_robots(
            Some("User-agent: *\nAllow: /"),
            &urls(&["https://example.com/sitemap.xml"]),
        );
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "User-agent: *",
                "Allow: /",
                "Sitemap: https://example.com/sitemap.xml"
            ]
        );
    }

    #[test]
    fn test_existing_directive_not_duplicated() {
        let existing = "User-agent: *\nDisallow: /admin\nSitemap: https://example.com/sitemap.xml\n";
        let out = compose_robots(Some(existing), &urls(&["https://example.com/sitemap.xml"]));
        assert_eq!(out, existing);
    }

    #[test]
    fn test_only_missing_lines_are_added() {
        let existing = "User-agent: *\nSitemap: https://example.com/sitemap-pages.xml\n";
        let out = compose_robots(
            Some(existing),
            &urls(&[
                "https://example.com/sitemap-pages.xml",
                "https://example.com/sitemap-blog.xml",
                "https://example.com/sitemap-blog.xml",
            ]),
        );
        assert_eq!(
            out,
            "User-agent: *\nSitemap: https://example.com/sitemap-pages.xml\nSitemap: https://example.com/sitemap-blog.xml\n"
        );
    }

    #[test]
    fn test_other_sitemap_urls_kept() {
        let existing = "Sitemap: https://old.example.com/sitemap.xml\n";
        let out = compose_robots(Some(existing), &urls(&["https://example.com/sitemap.xml"]));
        assert!(out.starts_with(existing));
        assert!(out.ends_with("Sitemap: https://example.com/sitemap.xml\n"));
    }
}
