use super::*;

#[test]
fn short_content_is_untouched() {
    assert_eq!(truncate_content("hello"), "hello");
    let exact = "a".repeat(PREVIEW_CHARS);
    assert_eq!(truncate_content(&exact), exact);
}

#[test]
fn long_content_is_cut_with_ellipsis() {
    let long = "b".repeat(PREVIEW_CHARS + 20);
    let cut = truncate_content(&long);
    assert_eq!(cut.len(), PREVIEW_CHARS + 3);
    assert!(cut.ends_with("..."));
}

#[test]
fn truncation_respects_char_boundaries() {
    let long = "é".repeat(PREVIEW_CHARS + 1);
    let cut = truncate_content(&long);
    assert_eq!(cut.chars().count(), PREVIEW_CHARS + 3);
}

#[test]
fn display_date_formats_iso_timestamps() {
    assert_eq!(display_date("2024-05-01T14:30:12.5"), "May 1, 2024, 14:30");
    assert_eq!(display_date("2023-12-25"), "Dec 25, 2023");
}

#[test]
fn display_date_passes_through_garbage() {
    assert_eq!(display_date("yesterday"), "yesterday");
    assert_eq!(display_date("2024-13-01"), "2024-13-01");
}

#[test]
fn plural_suffix() {
    assert_eq!(plural(1, "like"), "1 like");
    assert_eq!(plural(0, "comment"), "0 comments");
}

#[test]
fn file_label_strips_directories() {
    assert_eq!(file_label("uploads/7/report.pdf"), "report.pdf");
    assert_eq!(file_label("plain.txt"), "plain.txt");
}

#[test]
fn file_href_prefers_backend_url() {
    let base = "http://127.0.0.1:8000";
    assert_eq!(file_href(base, "a.pdf", None), "http://127.0.0.1:8000/files/a.pdf");
    assert_eq!(file_href(base, "a.pdf", Some("/media/a.pdf")), "http://127.0.0.1:8000/media/a.pdf");
    assert_eq!(file_href(base, "a.pdf", Some("https://cdn.example/a.pdf")), "https://cdn.example/a.pdf");
}
