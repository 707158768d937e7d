use std::path::Path;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Infers a Content-Type from the text after the last `.` in `path`.
///
/// The match is exact and case-sensitive; anything not in the table, or a
/// path with no `.` at all, is served as `application/octet-stream`.
///
/// ```
/// # use filehost::http::mime::content_type_for;
/// # use std::path::Path;
/// assert_eq!(content_type_for(Path::new("www/index.html")), "text/html");
/// assert_eq!(content_type_for(Path::new("www/data.xyz")), "application/octet-stream");
/// ```
pub fn content_type_for(path: &Path) -> &'static str {
    let path = path.to_string_lossy();
    let Some((_, ext)) = path.rsplit_once('.') else {
        return DEFAULT_CONTENT_TYPE;
    };

    match ext {
        "html" | "htm" => "text/html",
        "txt" => "text/plain",
        "png" => "image/png",
        "gif" => "image/gif",
        "jpg" => "image/jpg",
        "ico" => "image/x-icon",
        "css" => "text/css",
        "js" => "application/javascript",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
