use std::path::Path;

/// MIME type for a photo attachment, inferred from the file extension.
pub fn get_content_type(file_path: &str) -> &'static str {
    let path = Path::new(file_path);
    match path.extension().and_then(|s| s.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_photo_extensions_map_to_image_types() {
        assert_eq!(get_content_type("selfie.jpg"), "image/jpeg");
        assert_eq!(get_content_type("logo.PNG"), "application/octet-stream");
        assert_eq!(get_content_type("logo.png"), "image/png");
        assert_eq!(get_content_type("frame.webp"), "image/webp");
    }

    #[test]
    fn unknown_extensions_fall_back_to_octet_stream() {
        assert_eq!(get_content_type("notes.txt"), "application/octet-stream");
        assert_eq!(get_content_type("no_extension"), "application/octet-stream");
    }
}
