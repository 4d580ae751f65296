use crate::catalog::slugify;
use serde::{Deserialize, Serialize};

/// Trait value: states are text, serial and state number are integers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(u32),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: AttributeValue,
}

impl Attribute {
    fn text(trait_type: &str, value: &str) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Text(value.to_string()),
        }
    }

    fn number(trait_type: &str, value: u32) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Number(value),
        }
    }
}

/// Per-token metadata document. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub animation_url: String,
    pub attributes: Vec<Attribute>,
}

impl QuarterMetadata {
    /// Build the record for one quarter.
    ///
    /// `state_number` is the 1-based rank of `state`, `edition_size` the number
    /// of serials per state.
    pub fn new(
        state: &str,
        serial: u32,
        state_number: u32,
        edition_size: u32,
        image_base_url: &str,
    ) -> Self {
        let slug = slugify(state);

        Self {
            name: format!("{} #{}", state, serial),
            description: format!(
                "Crypto Quarter: {}, Serial #{} of {}",
                state,
                serial,
                format_with_commas(edition_size)
            ),
            image: format!("{}/{}.png", image_base_url, slug),
            animation_url: format!("{}/{}.mp4", image_base_url, slug),
            attributes: vec![
                Attribute::text("State", state),
                Attribute::number("Serial", serial),
                Attribute::number("State Number", state_number),
            ],
        }
    }

    pub fn state(&self) -> Option<&str> {
        self.attribute("State").and_then(|v| match v {
            AttributeValue::Text(s) => Some(s.as_str()),
            AttributeValue::Number(_) => None,
        })
    }

    pub fn serial(&self) -> Option<u32> {
        self.number_attribute("Serial")
    }

    pub fn state_number(&self) -> Option<u32> {
        self.number_attribute("State Number")
    }

    fn attribute(&self, trait_type: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|a| a.trait_type == trait_type)
            .map(|a| &a.value)
    }

    fn number_attribute(&self, trait_type: &str) -> Option<u32> {
        match self.attribute(trait_type) {
            Some(AttributeValue::Number(n)) => Some(*n),
            _ => None,
        }
    }
}

/// 10000 -> "10,000"
pub fn format_with_commas(value: u32) -> String {
    let digits = value.to_string();
    // Digits before the first separator
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.char_indices() {
        if idx > 0 && idx % 3 == lead {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
