//! Session request construction: instruction text plus the fixed output schema

use remoview_core::error::Result;
use remoview_core::models::{Coordinates, GuessField, UserGuesses};
use serde_json::{json, Map, Value};

use crate::ports::StructuredRequest;

/// Build the single inference request for a session.
///
/// Guesses are validated first; an incomplete or generic submission is
/// rejected here, before anything reaches the network.
pub fn build_session_request(
    coordinates: &Coordinates,
    guesses: &UserGuesses,
) -> Result<StructuredRequest> {
    coordinates.validate()?;
    guesses.validate()?;

    Ok(StructuredRequest {
        prompt: build_prompt(coordinates, guesses)?,
        schema: session_schema(),
    })
}

/// Instruction describing the three sub-tasks of a session
pub fn build_prompt(coordinates: &Coordinates, guesses: &UserGuesses) -> Result<String> {
    let guesses_json = serde_json::to_string(guesses)?;

    Ok(format!(
        r#"You are a remote viewing validation assistant. Your task is to process a set of coordinates and a user's psychic impressions in three steps, returning a single JSON object.

1.  **Determine Ground Truth:** For the coordinates latitude {lat}, longitude {lng}, identify the real-world geographical and cultural information. Do not invent data.

2.  **Validate Guesses:** Using the ground truth from step 1, analyze the user's guesses below. Provide a score (0-100) and detailed feedback for each guess. Be lenient with synonyms (e.g., 'sea'/'ocean', 'jungle'/'forest'). 'close' is for conceptually related items (e.g., 'hills' for 'mountains'). 'correct' is for direct matches or synonyms.

3.  **Generate Keywords:** Based on the ground truth, generate a comma-separated list of 3-4 concise keywords for finding a representative stock photo.

**User's Guesses:** {guesses}
"#,
        lat = coordinates.lat,
        lng = coordinates.lng,
        guesses = guesses_json,
    ))
}

/// Output schema: one object with `locationData`, `validationResult` and `photoKeywords`
pub fn session_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "locationData": location_schema(),
            "validationResult": validation_schema(),
            "photoKeywords": {
                "type": "STRING",
                "description": "A comma-separated list of 3-4 concise, effective keywords for finding a representative stock photo (e.g., 'Eiffel Tower,Paris,cityscape')."
            }
        },
        "required": ["locationData", "validationResult", "photoKeywords"]
    })
}

fn location_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "country": { "type": "STRING", "description": "The country where the coordinates are located." },
            "continent": { "type": "STRING", "description": "The continent of the location." },
            "areaType": { "type": "STRING", "description": "The primary type of area (e.g., Urban, Forest, Desert, Water)." },
            "majorFeatures": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of 3-5 major natural or man-made features at this location."
            },
            "dominantLanguages": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of dominant languages spoken in this area."
            }
        },
        "required": ["country", "continent", "areaType", "majorFeatures", "dominantLanguages"]
    })
}

fn validation_schema() -> Value {
    let mut properties = Map::new();
    for field in GuessField::ALL {
        properties.insert(field.key().to_string(), feedback_schema());
    }
    let required: Vec<&str> = GuessField::ALL.iter().map(|f| f.key()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "score": {
                "type": "NUMBER",
                "description": "An overall score from 0 to 100 based on the accuracy of all guesses."
            },
            "feedback": {
                "type": "OBJECT",
                "properties": properties,
                "required": required
            }
        },
        "required": ["score", "feedback"]
    })
}

fn feedback_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "guess": { "type": "STRING" },
            "actual": { "type": "STRING" },
            "evaluation": { "type": "STRING", "enum": ["correct", "close", "wrong"] },
            "explanation": { "type": "STRING" }
        },
        "required": ["guess", "actual", "evaluation", "explanation"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use remoview_core::error::RemoviewError;
    use remoview_core::models::GuessError;

    fn guesses() -> UserGuesses {
        UserGuesses {
            seen_object1: "dunes".to_string(),
            seen_object2: "camel".to_string(),
            seen_object3: "oasis".to_string(),
            continent: "Africa".to_string(),
            language: "Arabic".to_string(),
            area_type: "Desert".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_coordinates_and_guesses() {
        let coordinates = Coordinates { lat: 23.4162, lng: 25.6628 };
        let prompt = build_prompt(&coordinates, &guesses()).unwrap();

        assert!(prompt.contains("latitude 23.4162, longitude 25.6628"));
        assert!(prompt.contains(r#""seenObject1":"dunes""#));
        assert!(prompt.contains(r#""areaType":"Desert""#));
        assert!(prompt.contains("'hills' for 'mountains'"));
    }

    #[test]
    fn test_schema_requires_three_members() {
        let schema = session_schema();
        assert_eq!(
            schema["required"],
            json!(["locationData", "validationResult", "photoKeywords"])
        );
    }

    #[test]
    fn test_schema_feedback_has_exactly_six_fields() {
        let schema = session_schema();
        let feedback = &schema["properties"]["validationResult"]["properties"]["feedback"];

        let properties = feedback["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 6);
        for field in GuessField::ALL {
            assert!(properties.contains_key(field.key()));
        }
        assert_eq!(feedback["required"].as_array().unwrap().len(), 6);
        assert_eq!(
            properties["continent"]["properties"]["evaluation"]["enum"],
            json!(["correct", "close", "wrong"])
        );
    }

    #[test]
    fn test_invalid_guesses_never_produce_a_request() {
        let mut bad = guesses();
        bad.seen_object3 = "Dirt".to_string();

        let result = build_session_request(&Coordinates { lat: 0.0, lng: 0.0 }, &bad);
        assert!(matches!(
            result,
            Err(RemoviewError::InvalidGuesses(GuessError::GenericImpression { .. }))
        ));
    }

    #[test]
    fn test_valid_guesses_produce_a_request() {
        let request =
            build_session_request(&Coordinates { lat: 10.0, lng: -20.0 }, &guesses()).unwrap();
        assert!(request.prompt.contains("latitude 10, longitude -20"));
        assert_eq!(request.schema, session_schema());
    }
}
