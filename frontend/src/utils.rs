use crate::conf::BASE_URL;

/// Resolves the URL an image should be fetched from.
///
/// Paths that are already absolute stay untouched. Server-side upload paths
/// (`/uploads/...`) get the configured base origin prepended, unless none is
/// configured, in which case they stay relative and the dev proxy serves
/// them.
pub fn image_url(path: Option<&str>) -> String {
    image_url_with_base(path, BASE_URL)
}

pub fn image_url_with_base(path: Option<&str>, base: &str) -> String {
    let path = match path {
        None | Some("") => return String::new(),
        Some(path) => path,
    };

    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }

    if path.starts_with("/uploads") {
        if base.is_empty() {
            return path.to_owned();
        }
        return format!("{base}{path}");
    }

    path.to_owned()
}
