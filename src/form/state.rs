use std::collections::HashMap;

use crate::form::catalog::ImageStyle;
use crate::form::contact::ContactData;
use crate::models::{PhotoAttachment, SubmitPayload};

/// Questionnaire fields the form tracks validation errors for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    ProductName,
    Industry,
    ImageStyle,
    ProblemStatement,
    Tone,
    Cta,
}

/// Transient state of the marketing questionnaire: current answers, photo
/// slots and per-field validation errors. Discarded (or reset) after each
/// submission.
#[derive(Default)]
pub struct FormState {
    pub product_name: String,
    pub industry: String,
    pub image_style: Option<ImageStyle>,
    pub problem_statement: String,
    pub tone: String,
    pub cta: String,
    pub product_visual: Option<PhotoAttachment>,
    pub user_photo: Option<PhotoAttachment>,
    pub logo_photo: Option<PhotoAttachment>,
    errors: HashMap<FormField, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a text answer. Editing a field clears its validation error.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::ProductName => self.product_name = value.to_owned(),
            FormField::Industry => self.industry = value.to_owned(),
            FormField::ImageStyle => self.image_style = value.parse().ok(),
            FormField::ProblemStatement => self.problem_statement = value.to_owned(),
            FormField::Tone => self.tone = value.to_owned(),
            FormField::Cta => self.cta = value.to_owned(),
        }
        self.errors.remove(&field);
    }

    /// Pick an image style directly (the style cards in the form).
    pub fn select_style(&mut self, style: ImageStyle) {
        self.image_style = Some(style);
        self.errors.remove(&FormField::ImageStyle);
    }

    pub fn set_product_visual(&mut self, photo: PhotoAttachment) {
        self.product_visual = Some(photo);
    }

    pub fn set_user_photo(&mut self, photo: PhotoAttachment) {
        self.user_photo = Some(photo);
    }

    pub fn set_logo_photo(&mut self, photo: PhotoAttachment) {
        self.logo_photo = Some(photo);
    }

    /// Check the required subset before the contact step may open.
    /// Populates the error map and returns whether submission may proceed.
    pub fn validate(&mut self) -> bool {
        let mut errors = HashMap::new();

        if self.product_name.trim().is_empty() {
            errors.insert(FormField::ProductName, "Product name is required".to_owned());
        }
        if self.industry.is_empty() {
            errors.insert(FormField::Industry, "Select an industry".to_owned());
        }
        if self.image_style.is_none() {
            errors.insert(FormField::ImageStyle, "Select an image style".to_owned());
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &HashMap<FormField, String> {
        &self.errors
    }

    /// Assemble the immutable submission payload from the current answers
    /// and the validated contact details.
    pub fn to_payload(&self, contact: &ContactData) -> SubmitPayload {
        SubmitPayload {
            product_name: self.product_name.clone(),
            product_visual: self.product_visual.clone(),
            industry: self.industry.clone(),
            image_style: self
                .image_style
                .map(|style| style.to_string())
                .unwrap_or_default(),
            problem_statement: self.problem_statement.clone(),
            tone: self.tone.clone(),
            cta: self.cta.clone(),
            user_photo: self.user_photo.clone(),
            logo_photo: self.logo_photo.clone(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            company: contact.company.clone(),
            role: contact.role.clone(),
            company_stage: contact.company_stage.clone(),
            phone: contact.phone.clone(),
            madtech_interest: contact.madtech_interest.clone(),
        }
    }

    /// Wipe everything for a fresh submission (the "create new" action).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
