use policy_audit::application::ports::{FileLoader, FileLoaderError};
use policy_audit::domain::{ContentType, Document};
use policy_audit::infrastructure::text_processing::PdfAdapter;

/// Single-page PDF with a Helvetica text run, or a blank page.
fn build_pdf(page_text: Option<&str>) -> Vec<u8> {
    let content = page_text
        .map(|t| format!("BT /F1 12 Tf 72 720 Td ({t}) Tj ET"))
        .unwrap_or_default();

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_start = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.extend_from_slice(xref.as_bytes());
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_start
        )
        .as_bytes(),
    );
    pdf
}

#[tokio::test]
async fn given_valid_pdf_bytes_when_extracting_then_returns_text() {
    let adapter = PdfAdapter::new();
    let pdf_bytes = build_pdf(Some("Incident response plan"));
    let document = Document::pdf("sample.pdf", pdf_bytes.len() as u64);

    let text = adapter.extract_text(&pdf_bytes, &document).await.unwrap();

    assert!(text.to_lowercase().contains("incident"));
}

#[tokio::test]
async fn given_blank_page_pdf_when_extracting_then_returns_empty_text() {
    let adapter = PdfAdapter::new();
    let pdf_bytes = build_pdf(None);
    let document = Document::pdf("blank.pdf", pdf_bytes.len() as u64);

    let text = adapter.extract_text(&pdf_bytes, &document).await.unwrap();

    assert!(text.trim().is_empty());
}

#[tokio::test]
async fn given_bytes_without_pdf_header_when_extracting_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();
    let garbage = b"not a pdf at all";
    let document = Document::pdf("corrupt.pdf", garbage.len() as u64);

    let result = adapter.extract_text(garbage, &document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_unreadable_encrypted_pdf_when_extracting_then_returns_encrypted() {
    let adapter = PdfAdapter::new();
    let data = b"%PDF-1.7\n1 0 obj << /Filter /Standard /V 5 >> endobj\ntrailer << /Encrypt 1 0 R >>\n%%EOF";
    let document = Document::pdf("locked.pdf", data.len() as u64);

    let result = adapter.extract_text(data, &document).await;

    assert!(matches!(result, Err(FileLoaderError::Encrypted(_))));
}

#[tokio::test]
async fn given_non_pdf_content_type_when_extracting_then_returns_unsupported() {
    let adapter = PdfAdapter::new();
    let data = b"plain words";
    let document = Document::new("notes.txt", ContentType::Text, data.len() as u64);

    let result = adapter.extract_text(data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
