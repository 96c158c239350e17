// src/crawl/pdf.rs
// =============================================================================
// Deciding whether something is a PDF.
//
// Two independent signals:
// - by name, before any request: the href mentions ".pdf"
// - by response: the server sends Content-Type: application/pdf
// =============================================================================

/// True when a raw href looks like a PDF by name.
///
/// Deliberately loose: any occurrence of ".pdf" counts, so
/// `file.pdf?v=2` matches, and so do false positives like `/a.pdfx` or
/// `/some.pdf/page`. Tightening this changes which files get downloaded.
pub fn looks_like_pdf(href: &str) -> bool {
    href.to_ascii_lowercase().contains(".pdf")
}

/// True for `application/pdf` content types, with or without parameters.
pub fn is_pdf_content_type(content_type: &str) -> bool {
    content_type
        .trim_start()
        .to_ascii_lowercase()
        .starts_with("application/pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_suffix() {
        assert!(looks_like_pdf("report.pdf"));
        assert!(looks_like_pdf("/files/REPORT.PDF"));
        assert!(looks_like_pdf("https://other.example.com/x.pdf"));
    }

    #[test]
    fn test_pdf_with_query_string() {
        assert!(looks_like_pdf("file.pdf?v=2"));
    }

    #[test]
    fn test_loose_matches_are_kept() {
        assert!(looks_like_pdf("/a.pdfx"));
        assert!(looks_like_pdf("/some.pdf/page"));
    }

    #[test]
    fn test_not_pdf() {
        assert!(!looks_like_pdf("page2.html"));
        assert!(!looks_like_pdf("/pdf/index.html"));
    }

    #[test]
    fn test_content_type() {
        assert!(is_pdf_content_type("application/pdf"));
        assert!(is_pdf_content_type("Application/PDF; qs=0.001"));
        assert!(!is_pdf_content_type("text/html"));
        assert!(!is_pdf_content_type("application/octet-stream"));
    }
}
