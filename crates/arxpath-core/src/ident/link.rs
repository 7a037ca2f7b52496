//! Identifier extraction from arXiv PDF links.

/// Pulls the identifier portion out of an arXiv PDF link, or passes a bare
/// identifier through unchanged.
///
/// For URLs, everything after the `pdf` path segment is kept (the legacy
/// category slug is a path segment of its own, so it must survive), and a
/// trailing `.pdf` is stripped. Returns `None` when the URL has no usable
/// path.
pub(crate) fn identifier_from_input(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if !input.contains("://") {
        return Some(input.to_string());
    }

    let parsed = url::Url::parse(input).ok()?;
    let segments: Vec<&str> = parsed
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    if segments.is_empty() {
        return None;
    }

    // Keep everything after a "pdf" marker segment; otherwise use the whole
    // path and let shape matching reject non-identifiers.
    let tail = match segments.iter().position(|s| *s == "pdf") {
        Some(pos) if pos + 1 < segments.len() => &segments[pos + 1..],
        Some(_) => return None,
        None => &segments[..],
    };

    let joined = tail.join("/");
    let ident = joined.strip_suffix(".pdf").unwrap_or(&joined);
    if ident.is_empty() {
        None
    } else {
        Some(ident.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_pdf_link() {
        assert_eq!(
            identifier_from_input("https://arxiv.org/pdf/2406.18629v1.pdf").as_deref(),
            Some("2406.18629v1")
        );
    }

    #[test]
    fn categorized_pdf_link_keeps_slug() {
        assert_eq!(
            identifier_from_input("https://arxiv.org/pdf/acc-phys/9507001v2.pdf").as_deref(),
            Some("acc-phys/9507001v2")
        );
    }

    #[test]
    fn link_without_pdf_extension() {
        assert_eq!(
            identifier_from_input("https://arxiv.org/pdf/2406.18629").as_deref(),
            Some("2406.18629")
        );
    }

    #[test]
    fn bare_identifier_passes_through() {
        assert_eq!(
            identifier_from_input("9507001v2").as_deref(),
            Some("9507001v2")
        );
        assert_eq!(
            identifier_from_input("  hep-th/9601001  ").as_deref(),
            Some("hep-th/9601001")
        );
    }

    #[test]
    fn empty_or_rootless() {
        assert_eq!(identifier_from_input(""), None);
        assert_eq!(identifier_from_input("https://arxiv.org/"), None);
        assert_eq!(identifier_from_input("https://arxiv.org/pdf/"), None);
    }
}
