use thiserror::Error;

use crate::models::PhotoAttachment;

#[derive(Debug, Error)]
pub enum CameraError {
    #[error("could not access camera: {0}")]
    AccessDenied(String),
    #[error("no active camera stream")]
    NoStream,
    #[error("frame capture failed: {0}")]
    CaptureFailed(String),
}

/// Device capability the form depends on for photo capture.
///
/// Implementations wrap whatever camera access the host platform provides;
/// tests use a scripted fake. Frames are JPEG-encoded bytes.
pub trait CameraDevice {
    /// Open the device and start streaming frames.
    fn request_stream(&mut self) -> Result<(), CameraError>;
    /// Grab one JPEG-encoded frame from the active stream.
    fn capture_frame(&mut self) -> Result<Vec<u8>, CameraError>;
    /// Release the device. Must be safe to call with no active stream.
    fn stop(&mut self);
}

/// Capture one photo: open the stream, grab a frame, release the device.
///
/// The device is stopped even when the capture fails. The attachment is
/// named after the capture label with whitespace collapsed to dashes.
pub fn capture_photo(
    device: &mut impl CameraDevice,
    label: &str,
) -> Result<PhotoAttachment, CameraError> {
    device.request_stream()?;
    let frame = device.capture_frame();
    device.stop();

    let bytes = frame?;
    let file_name = format!("{}.jpg", dasherize(label));
    Ok(PhotoAttachment::new(file_name, "image/jpeg", bytes))
}

fn dasherize(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fake device that records its lifecycle calls.
    struct FakeCamera {
        fail_capture: bool,
        streaming: bool,
        stops: usize,
    }

    impl FakeCamera {
        fn new(fail_capture: bool) -> Self {
            Self {
                fail_capture,
                streaming: false,
                stops: 0,
            }
        }
    }

    impl CameraDevice for FakeCamera {
        fn request_stream(&mut self) -> Result<(), CameraError> {
            self.streaming = true;
            Ok(())
        }

        fn capture_frame(&mut self) -> Result<Vec<u8>, CameraError> {
            if !self.streaming {
                return Err(CameraError::NoStream);
            }
            if self.fail_capture {
                return Err(CameraError::CaptureFailed("sensor glitch".to_owned()));
            }
            Ok(vec![0xff, 0xd8, 0xff, 0xe0])
        }

        fn stop(&mut self) {
            self.streaming = false;
            self.stops += 1;
        }
    }

    #[test]
    fn captured_photo_is_named_after_the_label() {
        let mut camera = FakeCamera::new(false);
        let photo = capture_photo(&mut camera, "Agregar tu foto").unwrap();

        assert_eq!(photo.file_name, "Agregar-tu-foto.jpg");
        assert_eq!(photo.mime_type, "image/jpeg");
        assert!(!photo.bytes.is_empty());
    }

    #[test]
    fn device_is_released_after_a_successful_capture() {
        let mut camera = FakeCamera::new(false);
        capture_photo(&mut camera, "logo").unwrap();
        assert!(!camera.streaming);
        assert_eq!(camera.stops, 1);
    }

    #[test]
    fn device_is_released_even_when_capture_fails() {
        let mut camera = FakeCamera::new(true);
        let result = capture_photo(&mut camera, "logo");

        assert!(matches!(result, Err(CameraError::CaptureFailed(_))));
        assert_eq!(camera.stops, 1);
    }
}
