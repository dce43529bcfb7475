// src/sources/pdf.rs

use super::SourceError;

/// Extracts the text of every page that has any, each introduced by a
/// `--- Page N ---` separator (1-based).
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, SourceError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| SourceError::UnreadablePdf(e.to_string()))?;

    let text = join_pages(pages);
    if text.trim().is_empty() {
        return Err(SourceError::NoText);
    }
    Ok(text)
}

fn join_pages(pages: impl IntoIterator<Item = String>) -> String {
    pages
        .into_iter()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| format!("\n\n--- Page {} ---\n\n{}", index + 1, text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_pages_are_skipped_but_keep_their_number() {
        let pages = vec!["Cells.".to_string(), "  \n".to_string(), "DNA.".to_string()];
        assert_eq!(
            join_pages(pages),
            "\n\n--- Page 1 ---\n\nCells.\n\n--- Page 3 ---\n\nDNA."
        );
    }

    #[test]
    fn no_pages_means_no_text() {
        assert_eq!(join_pages(Vec::new()), "");
    }

    #[test]
    fn garbage_is_unreadable() {
        assert!(matches!(
            extract_pdf_text(b"definitely not a pdf"),
            Err(SourceError::UnreadablePdf(_))
        ));
    }
}
