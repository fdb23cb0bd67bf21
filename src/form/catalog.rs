use std::fmt;
use std::str::FromStr;

// Option lists offered by the form. These are wire values the backend
// matches on, not presentation text, so they stay verbatim.

pub const INDUSTRIES: [&str; 7] = [
    "SaaS / Software B2B",
    "Fintech / Servicios Financieros",
    "E-commerce / Retail",
    "Hardware / IoT (Internet de las Cosas)",
    "Recursos Humanos / Talento",
    "Deep Tech / Investigación (IA/ML complejo)",
    "Otro",
];

pub const TONES: [&str; 4] = [
    "Irónico/Satírico",
    "Chistoso/Relajado",
    "Formal/Directo",
    "Visionario/Inspirador",
];

pub const CTAS: [&str; 4] = [
    "Comprar/Contratar",
    "Aprender/Demo",
    "Invertir/Contactar",
    "Unirse al equipo",
];

pub const COMPANY_STAGES: [&str; 3] = ["Alpha", "Beta", "Growth"];

pub const MADTECH_SOLUTIONS: [&str; 5] = [
    "MadMonitor",
    "MadStreet",
    "MadSmart",
    "MadCreate",
    "MadFriday",
];

#[derive(Debug, thiserror::Error)]
#[error("invalid image style \"{0}\", expected one of: realistic, cartoon, anime, abstract")]
pub struct ParseImageStyleError(String);

/// Rendering style for the generated ad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ImageStyle {
    #[default]
    Realistic,
    Cartoon,
    Anime,
    Abstract,
}

impl FromStr for ImageStyle {
    type Err = ParseImageStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "realistic" => Ok(ImageStyle::Realistic),
            "cartoon" => Ok(ImageStyle::Cartoon),
            "anime" => Ok(ImageStyle::Anime),
            "abstract" => Ok(ImageStyle::Abstract),
            _ => Err(ParseImageStyleError(s.to_owned())),
        }
    }
}

impl fmt::Display for ImageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageStyle::Realistic => write!(f, "realistic"),
            ImageStyle::Cartoon => write!(f, "cartoon"),
            ImageStyle::Anime => write!(f, "anime"),
            ImageStyle::Abstract => write!(f, "abstract"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_style_round_trips_through_strings() {
        for style in [
            ImageStyle::Realistic,
            ImageStyle::Cartoon,
            ImageStyle::Anime,
            ImageStyle::Abstract,
        ] {
            assert_eq!(style.to_string().parse::<ImageStyle>().unwrap(), style);
        }
    }

    #[test]
    fn image_style_parse_is_case_insensitive() {
        assert_eq!(" Anime ".parse::<ImageStyle>().unwrap(), ImageStyle::Anime);
    }

    #[test]
    fn unknown_image_style_is_rejected() {
        assert!("vaporwave".parse::<ImageStyle>().is_err());
    }
}
