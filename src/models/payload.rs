use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::errors::ClientError;
use crate::utils::get_content_type;

/// A photo attached to a submission, held fully in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoAttachment {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl PhotoAttachment {
    pub fn new(file_name: impl Into<String>, mime_type: &'static str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type,
            bytes,
        }
    }

    /// Read an attachment from disk, inferring the MIME type from the file
    /// extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let mut file = File::open(path).await.map_err(|e| ClientError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .await
            .map_err(|e| ClientError::Io {
                path: path.display().to_string(),
                source: e,
            })?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("photo")
            .to_owned();
        Ok(Self {
            mime_type: get_content_type(&file_name),
            file_name,
            bytes,
        })
    }
}

/// One flattened multipart part of a submission.
#[derive(Clone, Debug)]
pub enum PartValue {
    Text(String),
    File(PhotoAttachment),
}

/// Everything one submission sends: the marketing answers, the contact
/// details and up to two photo attachments (plus an optional product
/// visual). Constructed once per submission and immutable thereafter.
///
/// Required-ness is a form-layer concern; the payload itself allows any
/// combination. Absent optional fields are omitted from the encoded body
/// entirely.
#[derive(Clone, Debug, Default)]
pub struct SubmitPayload {
    pub product_name: String,
    pub product_visual: Option<PhotoAttachment>,
    pub industry: String,
    pub image_style: String,
    pub problem_statement: String,
    pub tone: String,
    pub cta: String,
    pub user_photo: Option<PhotoAttachment>,
    pub logo_photo: Option<PhotoAttachment>,

    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub role: Option<String>,
    pub company_stage: Option<String>,
    pub phone: Option<String>,
    pub madtech_interest: Option<String>,
}

impl SubmitPayload {
    /// Flatten to named multipart parts. Text fields keep their string
    /// value as-is (empty included); `None` fields produce no part at all.
    pub fn parts(&self) -> Vec<(&'static str, PartValue)> {
        let mut parts: Vec<(&'static str, PartValue)> = vec![
            ("productName", PartValue::Text(self.product_name.clone())),
            ("industry", PartValue::Text(self.industry.clone())),
            ("imageStyle", PartValue::Text(self.image_style.clone())),
            (
                "problemStatement",
                PartValue::Text(self.problem_statement.clone()),
            ),
            ("tone", PartValue::Text(self.tone.clone())),
            ("cta", PartValue::Text(self.cta.clone())),
            ("name", PartValue::Text(self.name.clone())),
            ("email", PartValue::Text(self.email.clone())),
        ];

        let optional_text = [
            ("company", &self.company),
            ("role", &self.role),
            ("companyStage", &self.company_stage),
            ("phone", &self.phone),
            ("madtechInterest", &self.madtech_interest),
        ];
        for (field_name, value) in optional_text {
            if let Some(value) = value {
                parts.push((field_name, PartValue::Text(value.clone())));
            }
        }

        let photos = [
            ("productVisual", &self.product_visual),
            ("userPhoto", &self.user_photo),
            ("logoPhoto", &self.logo_photo),
        ];
        for (field_name, photo) in photos {
            if let Some(photo) = photo {
                parts.push((field_name, PartValue::File(photo.clone())));
            }
        }

        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_payload() -> SubmitPayload {
        SubmitPayload {
            product_name: "MadCreate".to_owned(),
            industry: "SaaS / Software B2B".to_owned(),
            image_style: "realistic".to_owned(),
            email: "ada@example.com".to_owned(),
            ..SubmitPayload::default()
        }
    }

    fn photo() -> PhotoAttachment {
        PhotoAttachment::new("selfie.jpg", "image/jpeg", vec![0xff, 0xd8, 0xff])
    }

    #[test]
    fn absent_optional_fields_produce_no_parts() {
        let parts = minimal_payload().parts();

        // The eight always-present text fields, nothing else.
        assert_eq!(parts.len(), 8);
        assert!(parts.iter().all(|(_, v)| matches!(v, PartValue::Text(_))));
        assert!(!parts.iter().any(|(name, _)| *name == "company"));
        assert!(!parts.iter().any(|(name, _)| *name == "userPhoto"));
    }

    #[test]
    fn part_count_is_text_fields_plus_file_fields() {
        let mut payload = minimal_payload();
        payload.company = Some("MadTech".to_owned());
        payload.phone = Some("+52 123 456 7890".to_owned());
        payload.user_photo = Some(photo());
        payload.logo_photo = Some(photo());

        let parts = payload.parts();
        assert_eq!(parts.len(), 8 + 2 + 2);

        let files: Vec<_> = parts
            .iter()
            .filter(|(_, v)| matches!(v, PartValue::File(_)))
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(files, vec!["userPhoto", "logoPhoto"]);
    }

    #[test]
    fn file_parts_keep_name_and_mime_type() {
        let mut payload = minimal_payload();
        payload.user_photo = Some(photo());

        let parts = payload.parts();
        let (_, value) = parts
            .iter()
            .find(|(name, _)| *name == "userPhoto")
            .expect("photo part present");
        match value {
            PartValue::File(attachment) => {
                assert_eq!(attachment.file_name, "selfie.jpg");
                assert_eq!(attachment.mime_type, "image/jpeg");
            }
            PartValue::Text(_) => panic!("photo encoded as text part"),
        }
    }

    #[test]
    fn empty_required_strings_are_still_sent() {
        // Field presence is not enforced by the payload type itself.
        let parts = SubmitPayload::default().parts();
        assert_eq!(parts.len(), 8);
    }
}
