use log::error;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const TESTIMONIALS_JSON: &str = include_str!("../content/testimonials.json");
const AWARDS_JSON: &str = include_str!("../content/awards.json");

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    /// Stars out of five.
    #[serde(default)]
    pub rating: Option<u8>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Award {
    pub year: String,
    pub project: String,
    pub category: String,
}

fn parse_list<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_str(raw)
}

fn load_list<T: DeserializeOwned>(name: &str, raw: &str) -> Vec<T> {
    match parse_list(raw) {
        Ok(items) => items,
        Err(e) => {
            error!("Failed to parse {} content: {}", name, e);
            Vec::new()
        }
    }
}

pub fn testimonials() -> Vec<Testimonial> {
    load_list("testimonials", TESTIMONIALS_JSON)
}

pub fn awards() -> Vec<Award> {
    load_list("awards", AWARDS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_testimonials_parse() {
        let testimonials = testimonials();
        assert_eq!(testimonials.len(), 4);
        assert_eq!(testimonials[0].name, "The Hendersons");
        assert!(testimonials.iter().all(|t| t.rating == Some(5)));
    }

    #[test]
    fn bundled_awards_parse() {
        let awards = awards();
        assert_eq!(awards.len(), 7);
        assert_eq!(awards[4].project, "On The Rocks");
        assert_eq!(awards[4].category, "$500K-$1M");
    }

    #[test]
    fn optional_testimonial_fields_default_to_none() {
        let parsed: Vec<Testimonial> =
            parse_list(r#"[{"quote": "Great work", "name": "A. Client"}]"#).unwrap();
        assert_eq!(parsed[0].title, None);
        assert_eq!(parsed[0].rating, None);
    }

    #[test]
    fn malformed_documents_fall_back_to_empty() {
        assert!(parse_list::<Award>(r#"[{"year": 2024}]"#).is_err());
        assert!(load_list::<Award>("awards", "not json").is_empty());
    }
}
