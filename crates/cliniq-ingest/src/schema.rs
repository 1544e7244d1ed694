//! The JSON Schema bundled for classifier output.
//!
//! Both snake_case and camelCase spellings of the multi-word fields are
//! described, matching the aliases `SymptomResult` accepts. Every field
//! other than a condition's `name` may also be `null`, which reads the same
//! as leaving it out.

use serde_json::{json, Value};

fn nullable(kind: &str) -> Value {
    json!({ "type": [kind, "null"] })
}

fn string_list() -> Value {
    json!({ "type": ["array", "null"], "items": { "type": "string" } })
}

fn condition_list() -> Value {
    json!({
        "type": ["array", "null"],
        "items": {
            "type": "object",
            "required": ["name"],
            "properties": {
                "name": { "type": "string" },
                "description": nullable("string"),
                "probability": nullable("number")
            }
        }
    })
}

/// Schema for one classifier payload.
pub fn classifier_output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "possible_conditions": condition_list(),
            "possibleConditions": condition_list(),
            "severity": nullable("integer"),
            "recommendations": string_list(),
            "requires_attention": nullable("boolean"),
            "requiresAttention": nullable("boolean"),
            "attention_reason": nullable("string"),
            "attentionReason": nullable("string"),
            "confidence": nullable("string"),
            "disclaimer": nullable("string"),
            "diet": {
                "type": ["object", "null"],
                "properties": {
                    "recommended_foods": string_list(),
                    "recommendedFoods": string_list(),
                    "foods_to_avoid": string_list(),
                    "foodsToAvoid": string_list(),
                    "hydration": nullable("string")
                }
            },
            "medications": {
                "type": ["object", "null"],
                "properties": {
                    "recommended": string_list(),
                    "supplements": string_list(),
                    "precautions": nullable("string")
                }
            }
        }
    })
}
