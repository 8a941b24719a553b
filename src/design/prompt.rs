use crate::models::DesignRequest;

pub const SYSTEM_PROMPT: &str = r#"You are an expert space habitat designer and engineer. Based on the user's requirements, provide detailed, realistic recommendations for their space habitat.

Consider:
- Environmental factors of the chosen planet/location
- Life support requirements based on number of residents
- Optimal layout for the chosen purpose
- Space efficiency and safety protocols
- Critical systems placement and redundancy
- Psychological well-being of residents

Provide your response in JSON format with the following structure:
{
  "volumeRequired": "calculated volume in cubic meters",
  "recommendedModules": ["list of module types needed"],
  "layout": {
    "description": "detailed layout description",
    "zones": ["list of recommended zones/areas"]
  },
  "criticalSystems": ["list of critical systems with brief descriptions"],
  "missingSystems": ["any critical systems not mentioned by user"],
  "specialConsiderations": ["planet-specific or situation-specific notes"],
  "costEstimate": "rough cost estimate",
  "constructionTime": "estimated construction timeline"
}"#;

pub const NOTES_LABEL: &str = "- Additional Notes:";

/// Renders the per-request prompt. The notes line is only present when the
/// request carries non-empty notes.
pub fn build_user_prompt(request: &DesignRequest) -> String {
    let mut prompt = format!(
        "Design a space habitat with these specifications:\n\
         - Location: {}\n\
         - Number of Residents: {}\n\
         - Size Preference: {}\n\
         - Shape: {}\n\
         - Primary Purpose: {}\n\
         - Lifestyle: {}\n\
         - Requested Systems: {}\n",
        request.planet,
        request.residents,
        request.size,
        request.shape,
        request.purpose,
        request.lifestyle,
        request.systems.join(", "),
    );

    if let Some(notes) = request.notes() {
        prompt.push_str(&format!("{} {}\n", NOTES_LABEL, notes));
    }

    prompt.push_str("\nPlease provide comprehensive design recommendations.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(notes: Option<&str>) -> DesignRequest {
        DesignRequest {
            planet: "titan".to_string(),
            residents: 6,
            size: "large".to_string(),
            shape: "dome".to_string(),
            purpose: "research".to_string(),
            lifestyle: "balanced".to_string(),
            systems: vec!["life-support".to_string(), "greenhouse".to_string()],
            notes: notes.map(str::to_string),
        }
    }

    #[test]
    fn test_prompt_interpolates_fields() {
        let prompt = build_user_prompt(&request(None));

        assert!(prompt.starts_with("Design a space habitat with these specifications:\n"));
        assert!(prompt.contains("- Location: titan\n"));
        assert!(prompt.contains("- Number of Residents: 6\n"));
        assert!(prompt.contains("- Size Preference: large\n"));
        assert!(prompt.contains("- Shape: dome\n"));
        assert!(prompt.contains("- Primary Purpose: research\n"));
        assert!(prompt.contains("- Lifestyle: balanced\n"));
        assert!(prompt.contains("- Requested Systems: life-support, greenhouse\n"));
        assert!(prompt.ends_with("Please provide comprehensive design recommendations."));
    }

    #[test]
    fn test_empty_notes_omit_line() {
        assert!(!build_user_prompt(&request(Some(""))).contains("Additional Notes"));
        assert!(!build_user_prompt(&request(None)).contains("Additional Notes"));
    }

    #[test]
    fn test_notes_line_is_verbatim() {
        let prompt = build_user_prompt(&request(Some("Needs a dog-friendly deck")));

        assert_eq!(prompt.matches("Additional Notes").count(), 1);
        assert!(prompt.contains("- Additional Notes: Needs a dog-friendly deck\n"));
    }

    #[test]
    fn test_no_systems() {
        let mut request = request(None);
        request.systems.clear();
        assert!(build_user_prompt(&request).contains("- Requested Systems: \n"));
    }

    #[test]
    fn test_system_prompt_names_every_field() {
        for field in [
            "volumeRequired",
            "recommendedModules",
            "layout",
            "zones",
            "criticalSystems",
            "missingSystems",
            "specialConsiderations",
            "costEstimate",
            "constructionTime",
        ] {
            assert!(SYSTEM_PROMPT.contains(field), "missing {}", field);
        }
    }
}
