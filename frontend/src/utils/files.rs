//! File-input helpers for the image upload forms.

pub const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Client-side gate before an upload request is even built: images only,
/// capped at 5 MB. The backend enforces the same limits.
pub fn validate_image_file(mime: &str, size_bytes: f64) -> Result<(), String> {
    if !mime.starts_with("image/") {
        return Err("Please choose an image file".to_string());
    }
    if size_bytes > MAX_IMAGE_BYTES {
        return Err("Image must be 5MB or smaller".to_string());
    }
    Ok(())
}

pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Failed to read file".to_string())?;
    let array = js_sys::Uint8Array::new(&buffer);
    Ok(array.to_vec())
}

#[cfg(test)]
mod tests {
    use super::validate_image_file;

    #[test]
    fn accepts_small_images() {
        assert!(validate_image_file("image/png", 1024.0).is_ok());
        assert!(validate_image_file("image/jpeg", 4.9 * 1024.0 * 1024.0).is_ok());
    }

    #[test]
    fn rejects_non_images() {
        assert!(validate_image_file("application/pdf", 1024.0).is_err());
        assert!(validate_image_file("text/plain", 10.0).is_err());
    }

    #[test]
    fn rejects_oversized_images() {
        assert!(validate_image_file("image/png", 6.0 * 1024.0 * 1024.0).is_err());
    }
}
