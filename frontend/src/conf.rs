/// Origin the API is reachable at, baked in at build time.
///
/// Local builds leave `API_BASE_URL` unset and keep paths relative, so the
/// dev server proxy handles them; production builds set it to the backend
/// origin.
pub const BASE_URL: &str = {
    match option_env!("API_BASE_URL") {
        Some(url) => url,
        None => "",
    }
};
