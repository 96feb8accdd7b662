use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of positional ingredient/measure pairs in an upstream record.
pub const SLOT_COUNT: usize = 20;

/// Body of a `search.php` response.
///
/// `meals` is `null` (or missing) when nothing matched.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub meals: Option<Vec<RawMeal>>,
}

/// One record exactly as the upstream endpoint serves it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMeal {
    #[serde(rename = "idMeal", default)]
    pub id: Option<String>,
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,
    #[serde(rename = "strSource", default)]
    pub source: Option<String>,
    /// Everything else, including `strIngredientN` / `strMeasureN`.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// One positional ingredient/measure pair, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

impl Slot {
    pub fn new(ingredient: impl Into<String>, measure: Option<&str>) -> Self {
        Slot {
            ingredient: Some(ingredient.into()),
            measure: measure.map(str::to_string),
        }
    }
}

/// A recipe record. Serves as both the search summary and the detail source,
/// since the search endpoint returns full records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub area: String,
    pub category: String,
    pub instructions: String,
    pub video: Option<String>,
    pub tags: Vec<String>,
    pub source: Option<String>,
    pub slots: [Slot; SLOT_COUNT],
}

impl From<RawMeal> for Meal {
    fn from(raw: RawMeal) -> Self {
        let mut slots: [Slot; SLOT_COUNT] = Default::default();
        for (i, slot) in slots.iter_mut().enumerate() {
            let n = i + 1;
            slot.ingredient = text_field(&raw.rest, &format!("strIngredient{n}"));
            slot.measure = text_field(&raw.rest, &format!("strMeasure{n}"));
        }

        let tags = raw
            .tags
            .as_deref()
            .map(|t| {
                t.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Meal {
            id: raw.id.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            thumbnail: raw.thumbnail.unwrap_or_default(),
            area: raw.area.unwrap_or_default(),
            category: raw.category.unwrap_or_default(),
            instructions: raw.instructions.unwrap_or_default(),
            video: non_blank(raw.youtube),
            tags,
            source: non_blank(raw.source),
            slots,
        }
    }
}

/// Read a string-valued key, treating `null` and non-strings as absent.
fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl SearchResponse {
    /// Convert the wire document into typed meals, upstream order preserved.
    /// Absent and `null` collections both yield an empty list.
    pub fn into_meals(self) -> Vec<Meal> {
        self.meals
            .unwrap_or_default()
            .into_iter()
            .map(Meal::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_meals_is_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(response.into_meals().is_empty());
    }

    #[test]
    fn test_missing_meals_key_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_meals().is_empty());
    }

    #[test]
    fn test_slots_are_positional() {
        let json = r#"{
            "idMeal": "1",
            "strMeal": "Toast",
            "strIngredient1": "Bread",
            "strMeasure1": "2 slices",
            "strIngredient2": "",
            "strMeasure2": " ",
            "strIngredient3": "Butter",
            "strMeasure3": null,
            "strIngredient20": null
        }"#;
        let raw: RawMeal = serde_json::from_str(json).unwrap();
        let meal = Meal::from(raw);

        assert_eq!(meal.slots[0], Slot::new("Bread", Some("2 slices")));
        assert_eq!(meal.slots[1].ingredient.as_deref(), Some(""));
        assert_eq!(meal.slots[2], Slot::new("Butter", None));
        assert_eq!(meal.slots[19], Slot::default());
    }

    #[test]
    fn test_optional_text_fields() {
        let json = r#"{
            "idMeal": "2",
            "strMeal": "Soup",
            "strYoutube": "",
            "strSource": null,
            "strTags": "Soup, ,Winter,",
            "strArea": "British"
        }"#;
        let meal = Meal::from(serde_json::from_str::<RawMeal>(json).unwrap());

        assert_eq!(meal.video, None);
        assert_eq!(meal.source, None);
        assert_eq!(meal.tags, vec!["Soup", "Winter"]);
        assert_eq!(meal.area, "British");
        assert_eq!(meal.category, "");
    }

    #[test]
    fn test_null_name_does_not_drop_other_records() {
        let json = r#"{"meals": [
            {"idMeal": "1", "strMeal": null},
            {"idMeal": null, "strMeal": "Kedgeree"},
            {"idMeal": "3", "strMeal": "Kumpir"}
        ]}"#;
        let meals = serde_json::from_str::<SearchResponse>(json)
            .unwrap()
            .into_meals();

        assert_eq!(meals.len(), 3);
        assert_eq!(meals[0].name, "");
        assert_eq!(meals[1].id, "");
        assert_eq!(meals[1].name, "Kedgeree");
        assert_eq!(meals[2].name, "Kumpir");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "idMeal": "3",
            "strMeal": "Pie",
            "dateModified": null,
            "strCreativeCommonsConfirmed": null,
            "strIngredient1": "Flour"
        }"#;
        let meal = Meal::from(serde_json::from_str::<RawMeal>(json).unwrap());
        assert_eq!(meal.slots[0].ingredient.as_deref(), Some("Flour"));
    }
}
