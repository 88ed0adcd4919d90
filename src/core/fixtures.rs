// src/core/fixtures.rs

//! Shared sample data for unit tests.
//!
//! Twenty records over three facets. Records whose text mentions "gala"
//! somewhere: 1, 3, 4, 6, 7, 9, 11, 13, 18. Of those, 3 only carries
//! `scale=medium` and 13 has no `scale` entry at all.

use crate::core::catalog::loader::parse_document;
use crate::core::types::{CatalogDocument, Record, RecordId};

pub(crate) const SAMPLE_CATALOG: &str = r#"{
  "meta": { "totalConcepts": 20, "lastUpdated": "2024-05-01" },
  "filterOptions": {
    "scale": [
      { "id": "small", "name": "Small group", "icon": "S" },
      { "id": "medium", "name": "Medium" },
      { "id": "large", "name": "Large crowd", "icon": "L" }
    ],
    "budget": [
      { "id": "low", "name": "Low" },
      { "id": "mid", "name": "Moderate" },
      { "id": "high", "name": "High" }
    ],
    "location": [
      { "id": "indoor", "name": "Indoor" },
      { "id": "outdoor", "name": "Outdoor" }
    ]
  },
  "events": [
    { "id": 1, "name": "Gala Dinner", "definition": "Formal evening banquet", "category": "social",
      "filters": { "scale": ["large"], "budget": ["high"], "location": ["indoor"] } },
    { "id": 2, "name": "Summer Fest", "definition": "Open-air music festival", "category": "cultural",
      "filters": { "scale": ["large"], "location": ["outdoor"] } },
    { "id": 3, "name": "Charity Gala", "definition": "Fundraising evening", "category": "social",
      "filters": { "scale": ["medium"], "budget": ["mid"] } },
    { "id": 4, "name": "Corporate Party", "definition": "Year-end celebration with a gala show", "category": "business",
      "filters": { "scale": ["large"], "budget": ["high"] } },
    { "id": 5, "name": "Team Building", "definition": "Cooperative games", "goal": "Strengthen a team",
      "category": "business", "filters": { "scale": ["small"], "budget": ["low"] } },
    { "id": 6, "name": "Product Launch", "definition": "Presentation of a new product",
      "features": "Stage, press area, gala reception", "category": "promo",
      "filters": { "scale": ["large"], "budget": ["mid", "high"] } },
    { "id": 7, "name": "Award Ceremony", "definition": "Honouring achievements",
      "aliases": ["Gala awards", "Prize night"], "category": "ceremonial",
      "filters": { "scale": ["large", "medium"], "location": ["indoor"] } },
    { "id": 8, "name": "Workshop", "definition": "Hands-on learning session", "category": "educational",
      "filters": { "scale": ["small"] } },
    { "id": 9, "name": "Conference", "definition": "Multi-track professional meeting",
      "goal": "Networking at the closing gala", "category": "business",
      "filters": { "scale": ["large"], "budget": ["high"], "location": ["indoor"] } },
    { "id": 10, "name": "Banquet", "definition": "Formal meal", "category": "social" },
    { "id": 11, "name": "Gala Concert", "definition": "Classical music evening", "category": "cultural",
      "filters": { "scale": ["medium", "large"], "location": ["indoor"] } },
    { "id": 12, "name": "Networking Breakfast", "definition": "Morning meetup", "category": "business",
      "filters": { "scale": ["small"], "budget": ["low"] } },
    { "id": 13, "name": "Festival", "definition": "A gala of street culture", "category": "cultural",
      "filters": { "budget": ["low"], "location": ["outdoor"] } },
    { "id": 14, "name": "Picnic", "definition": "Lunch in the park", "category": "social",
      "filters": { "scale": ["small"], "location": ["outdoor"] } },
    { "id": 15, "name": "Hackathon", "definition": "Overnight coding sprint", "category": "specialized",
      "filters": { "scale": ["medium"], "budget": ["mid"] } },
    { "id": 16, "name": "Webinar", "definition": "Live online talk", "category": "online",
      "filters": { "scale": ["small"], "budget": ["low"] } },
    { "id": 17, "name": "Exhibition", "definition": "Trade show", "category": "promo",
      "filters": { "scale": ["large"], "location": ["indoor"] } },
    { "id": 18, "name": "GALA NIGHT", "definition": "Black-tie party", "category": "social",
      "filters": { "scale": ["large"], "budget": ["high"] } },
    { "id": 19, "name": "Flash Mob", "definition": "Surprise public performance", "category": "promo",
      "filters": { "scale": ["large"], "location": ["outdoor"] } },
    { "id": 20, "name": "Masterclass", "definition": "Expert-led lesson", "category": "educational",
      "filters": { "scale": ["small"], "budget": ["mid"] } }
  ]
}"#;

pub(crate) fn sample_document() -> CatalogDocument {
    parse_document(SAMPLE_CATALOG).expect("sample catalog parses")
}

/// A bare record with a name and definition.
pub(crate) fn record(id: RecordId, name: &str, definition: &str) -> Record {
    Record {
        id: Some(id),
        name: Some(name.to_string()),
        definition: Some(definition.to_string()),
        ..Record::default()
    }
}

/// `record` plus facet entries.
pub(crate) fn tagged(id: RecordId, name: &str, facets: Vec<(&str, Vec<&str>)>) -> Record {
    Record {
        filters: Some(
            facets
                .into_iter()
                .map(|(facet, values)| {
                    (facet.to_string(), values.into_iter().map(str::to_string).collect())
                })
                .collect(),
        ),
        ..record(id, name, "")
    }
}

pub(crate) fn ids(records: &[&Record]) -> Vec<RecordId> {
    records.iter().map(|r| r.id_or_zero()).collect()
}
