use filecast::http::mime::{DEFAULT_CONTENT_TYPE, content_type};

#[test]
fn test_mapped_extensions() {
    let cases = [
        ("index.html", "text/html"),
        ("old.htm", "text/html"),
        ("photo.jpg", "image/jpeg"),
        ("photo.jpeg", "image/jpeg"),
        ("anim.gif", "image/gif"),
        ("track.mp3", "audio/mpeg"),
        ("paper.pdf", "application/pdf"),
    ];

    for (name, expected) in cases {
        assert_eq!(content_type(name), expected, "{name}");
    }
}

#[test]
fn test_unmapped_extensions_default() {
    for name in ["notes.txt", "style.css", "app.js", "image.png", "data.json"] {
        assert_eq!(content_type(name), DEFAULT_CONTENT_TYPE, "{name}");
    }
}

#[test]
fn test_missing_extension_defaults() {
    assert_eq!(content_type("README"), "application/octet-stream");
    assert_eq!(content_type(""), "application/octet-stream");
}

#[test]
fn test_matching_is_case_sensitive() {
    assert_eq!(content_type("INDEX.HTML"), DEFAULT_CONTENT_TYPE);
    assert_eq!(content_type("photo.JPG"), DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_trailing_dot_and_dotfiles() {
    assert_eq!(content_type("file."), DEFAULT_CONTENT_TYPE);
    assert_eq!(content_type(".html"), "text/html");
}

#[test]
fn test_dot_in_directory_name() {
    assert_eq!(content_type("site.v2/page.html"), "text/html");
    assert_eq!(content_type("site.html/README"), DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_non_utf8_filenames() {
    assert_eq!(content_type(b"caf\xe9.html"), "text/html");
    assert_eq!(content_type(b"\xff\xfe.jpeg"), "image/jpeg");
    assert_eq!(content_type(b"photo.\xff"), DEFAULT_CONTENT_TYPE);
}
